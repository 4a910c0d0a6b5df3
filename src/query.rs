//! Debug rendering of parameterized statements.
//!
//! A statement builder hands over a template with positional `?` placeholders
//! and its bound values; each placeholder is replaced, in order, by the
//! literal of the matching value.
//!
//! ```rust
//! use scalarize::{query_str, Value};
//!
//! let statement = (
//!     "select * from users where id = ? and active = ?",
//!     vec![Value::from(7), Value::from(true)],
//! );
//! assert_eq!(
//!     query_str(&statement).unwrap(),
//!     "select * from users where id = 7 and active = true"
//! );
//! ```

use crate::{LiteralSerializer, Result, Value};

/// A statement with positional placeholders and the values bound to them.
pub trait BoundStatement {
    fn sql(&self) -> &str;

    fn bindings(&self) -> &[Value];
}

impl<S: AsRef<str>> BoundStatement for (S, Vec<Value>) {
    fn sql(&self) -> &str {
        self.0.as_ref()
    }

    fn bindings(&self) -> &[Value] {
        &self.1
    }
}

/// Replaces each `?` in `template` with the literal of the next binding.
///
/// Placeholders left over once the bindings run out stay `?`; bindings left
/// over once the placeholders run out are ignored.
///
/// # Examples
///
/// ```rust
/// use scalarize::{interpolate, Value};
///
/// let text = interpolate("in (?, ?, ?)", &[Value::from("a"), Value::Null]).unwrap();
/// assert_eq!(text, "in ('a', null, ?)");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnrepresentableValue`](crate::Error::UnrepresentableValue)
/// if a binding has no literal form.
pub fn interpolate(template: &str, bindings: &[Value]) -> Result<String> {
    let serializer = LiteralSerializer::default();
    let mut bindings = bindings.iter();
    let mut segments = template.split('?');
    let mut output = String::with_capacity(template.len());

    if let Some(first) = segments.next() {
        output.push_str(first);
    }
    for segment in segments {
        match bindings.next() {
            Some(value) => output.push_str(&serializer.to_literal(std::slice::from_ref(value))?),
            None => output.push('?'),
        }
        output.push_str(segment);
    }
    Ok(output)
}

/// Renders a bound statement for debugging.
pub fn query_str<S: BoundStatement + ?Sized>(statement: &S) -> Result<String> {
    interpolate(statement.sql(), statement.bindings())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{value, Error, Object};

    struct Select {
        table: String,
        bindings: Vec<Value>,
    }

    impl BoundStatement for Select {
        fn sql(&self) -> &str {
            &self.table
        }

        fn bindings(&self) -> &[Value] {
            &self.bindings
        }
    }

    #[derive(Debug)]
    struct Connection;

    impl Object for Connection {}

    #[test]
    fn test_custom_statement() {
        let select = Select {
            table: "select * from t where tags = ?".to_string(),
            bindings: vec![value!(["a"])],
        };
        assert_eq!(
            query_str(&select).unwrap(),
            "select * from t where tags = [\n  0 => 'a',\n]"
        );
    }

    #[test]
    fn test_surplus_bindings_ignored() {
        let text = interpolate("x = ?", &[Value::from(1), Value::from(2)]).unwrap();
        assert_eq!(text, "x = 1");
    }

    #[test]
    fn test_no_placeholders() {
        assert_eq!(interpolate("select 1", &[]).unwrap(), "select 1");
    }

    #[test]
    fn test_unrepresentable_binding() {
        let err = interpolate("x = ?", &[Value::opaque(Connection)]).unwrap_err();
        assert!(matches!(err, Error::UnrepresentableValue(_)));
    }
}
