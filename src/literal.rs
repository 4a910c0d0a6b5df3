//! Compact, deterministic literal rendering.
//!
//! [`LiteralSerializer`] walks a [`Value`] tree and writes it in a bracket
//! literal syntax meant for debug output, generated configuration and
//! statement previews.
//!
//! ## Grammar
//!
//! ```text
//! true | false | null             booleans and null, at any depth
//! 42 | -7                         integers
//! 1.0 | 0.25 | 1e100 | INF | NAN  floats always carry a '.' or exponent
//! 'it\'s'                         strings: single quotes, only \ and ' escaped
//! []                              empty container, at any depth
//! [                               non-empty container: one entry per line,
//!   0 => 'a',                     index keys bare, name keys quoted,
//!   'k' => [                      nested openings stay on the key's line,
//!     'x' => 1,                   every entry ends with a comma
//!   ],
//! ]
//! Point::from_state([...])        object with reconstructible state; scalar
//!                                 state is wrapped as entry 0
//! ```
//!
//! Several values passed to one call are joined with a single space.
//!
//! ## Examples
//!
//! ```rust
//! use scalarize::{to_literal, value, Value};
//!
//! assert_eq!(to_literal(&[Value::Bool(true), Value::Null]).unwrap(), "true null");
//! assert_eq!(to_literal(&[value!([])]).unwrap(), "[]");
//! assert_eq!(
//!     to_literal(&[value!({ "a": [1], "b": {} })]).unwrap(),
//!     "[\n  'a' => [\n    0 => 1,\n  ],\n  'b' => [],\n]"
//! );
//! ```

use crate::{Container, Error, Key, LiteralOptions, Number, Opaque, Result, Value};

/// Renders values as literals according to [`LiteralOptions`].
#[derive(Clone, Debug, Default)]
pub struct LiteralSerializer {
    options: LiteralOptions,
}

impl LiteralSerializer {
    pub fn new(options: LiteralOptions) -> Self {
        LiteralSerializer { options }
    }

    /// Renders each value and joins the literals with a single space.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrepresentableValue`] if any value contains an object
    /// without reconstructible state.
    pub fn to_literal(&self, values: &[Value]) -> Result<String> {
        let mut output = String::with_capacity(64 * values.len().max(1));
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                output.push(' ');
            }
            self.write_value(&mut output, value, 0)?;
        }
        Ok(output)
    }

    fn write_value(&self, output: &mut String, value: &Value, level: usize) -> Result<()> {
        match value {
            Value::Null => output.push_str("null"),
            Value::Bool(b) => output.push_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write_number(output, n),
            Value::String(s) => write_string(output, s),
            Value::Container(c) => self.write_container(output, c, level)?,
            Value::Opaque(o) => self.write_object(output, o, level)?,
        }
        Ok(())
    }

    fn write_container(&self, output: &mut String, container: &Container, level: usize) -> Result<()> {
        if container.is_empty() {
            output.push_str("[]");
            return Ok(());
        }

        output.push_str("[\n");
        for (key, value) in container {
            self.write_indent(output, level + 1);
            write_key(output, key);
            output.push_str(" => ");
            self.write_value(output, value, level + 1)?;
            output.push_str(",\n");
        }
        self.write_indent(output, level);
        output.push(']');
        Ok(())
    }

    fn write_object(&self, output: &mut String, opaque: &Opaque, level: usize) -> Result<()> {
        let state = opaque.object().reflect()?.ok_or_else(|| {
            Error::unrepresentable(&format!(
                "`{}` has no reconstructible state",
                opaque.type_name()
            ))
        })?;
        // State is always written as a container; a bare scalar sits at index 0.
        let state: Container = match serde_json::from_value::<Value>(state)? {
            Value::Container(c) => c,
            scalar => std::iter::once(scalar).collect(),
        };

        output.push_str(opaque.type_name());
        output.push_str("::from_state(");
        self.write_container(output, &state, level)?;
        output.push(')');
        Ok(())
    }

    #[inline]
    fn write_indent(&self, output: &mut String, level: usize) {
        for _ in 0..level * self.options.indent {
            output.push(' ');
        }
    }
}

fn write_key(output: &mut String, key: &Key) {
    match key {
        Key::Index(i) => output.push_str(&i.to_string()),
        Key::Name(name) => write_string(output, name),
    }
}

fn write_number(output: &mut String, number: &Number) {
    match number {
        Number::Integer(i) => output.push_str(&i.to_string()),
        Number::Float(f) if f.is_nan() => output.push_str("NAN"),
        Number::Float(f) if f.is_infinite() => {
            output.push_str(if *f > 0.0 { "INF" } else { "-INF" })
        }
        // Debug formatting is the shortest round-trip form and keeps a '.' or exponent.
        Number::Float(f) => output.push_str(&format!("{:?}", f)),
    }
}

fn write_string(output: &mut String, s: &str) {
    output.push('\'');
    for ch in s.chars() {
        match ch {
            '\'' => output.push_str("\\'"),
            '\\' => output.push_str("\\\\"),
            _ => output.push(ch),
        }
    }
    output.push('\'');
}

/// Renders values with default options, joined by a single space.
///
/// # Examples
///
/// ```rust
/// use scalarize::{to_literal, Value};
///
/// let text = to_literal(&[Value::from(1), Value::from("a'b"), Value::from(2.0)]).unwrap();
/// assert_eq!(text, r"1 'a\'b' 2.0");
/// ```
///
/// # Errors
///
/// Returns [`Error::UnrepresentableValue`] for objects without reconstructible state.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_literal(values: &[Value]) -> Result<String> {
    LiteralSerializer::default().to_literal(values)
}
