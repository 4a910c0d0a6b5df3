/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Arrays become index-keyed containers, objects become containers keyed by
/// their literal keys (string literals give name keys, integer literals give
/// index keys). Negative number literals may be written as is; anything else
/// is converted with `Value::from`, and expressions made of several tokens
/// must be wrapped in parentheses.
///
/// ```rust
/// use scalarize::{value, Value};
///
/// let v = value!({ "name": "Alice", "tags": ["a", "b"], 3: null });
/// assert_eq!(v.get(3), Some(&Value::Null));
/// ```
#[macro_export]
macro_rules! value {
    // Array elements, one at a time so negative numbers stay whole
    (@elems $c:ident; ) => {};

    (@elems $c:ident; - $num:literal $(, $($rest:tt)*)?) => {
        $c.push($crate::value!(- $num));
        $crate::value!(@elems $c; $($($rest)*)?);
    };

    (@elems $c:ident; $elem:tt $(, $($rest:tt)*)?) => {
        $c.push($crate::value!($elem));
        $crate::value!(@elems $c; $($($rest)*)?);
    };

    // Object entries
    (@entries $c:ident; ) => {};

    (@entries $c:ident; $key:literal : - $num:literal $(, $($rest:tt)*)?) => {
        $c.insert($key, $crate::value!(- $num));
        $crate::value!(@entries $c; $($($rest)*)?);
    };

    (@entries $c:ident; $key:literal : $value:tt $(, $($rest:tt)*)?) => {
        $c.insert($key, $crate::value!($value));
        $crate::value!(@entries $c; $($($rest)*)?);
    };

    // Handle null
    (null) => {
        $crate::Value::Null
    };

    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    ([]) => {
        $crate::Value::Container($crate::Container::new())
    };

    ([ $($elems:tt)+ ]) => {{
        let mut container = $crate::Container::new();
        $crate::value!(@elems container; $($elems)+);
        $crate::Value::Container(container)
    }};

    ({}) => {
        $crate::Value::Container($crate::Container::new())
    };

    ({ $($entries:tt)+ }) => {{
        let mut container = $crate::Container::new();
        $crate::value!(@entries container; $($entries)+);
        $crate::Value::Container(container)
    }};

    // Any other expression
    ($s:expr) => {
        $crate::Value::from($s)
    };
}

/// Renders any number of values as literals joined by a space.
///
/// Each argument is converted with `Value::from`.
///
/// ```rust
/// use scalarize::literal;
///
/// assert_eq!(literal!(true, 1, "a").unwrap(), "true 1 'a'");
/// ```
#[macro_export]
macro_rules! literal {
    ($($value:expr),* $(,)?) => {
        $crate::to_literal(&[$($crate::Value::from($value)),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::{Container, Key, Number, Value};

    #[test]
    fn test_value_macro_primitives() {
        assert_eq!(value!(null), Value::Null);
        assert_eq!(value!(true), Value::Bool(true));
        assert_eq!(value!(42), Value::Number(Number::Integer(42)));
        assert_eq!(value!(3.5), Value::Number(Number::Float(3.5)));
        assert_eq!(value!("hello"), Value::String("hello".to_string()));
    }

    #[test]
    fn test_value_macro_containers() {
        assert_eq!(value!([]), Value::Container(Container::new()));
        assert_eq!(value!({}), Value::Container(Container::new()));

        let obj = value!({ "name": "Alice", 0: [1, 2] });
        let container = obj.as_container().unwrap();
        let keys: Vec<Key> = container.keys().cloned().collect();
        assert_eq!(keys, vec![Key::from("name"), Key::Index(0)]);
    }

    #[test]
    fn test_literal_macro() {
        assert_eq!(literal!(false, ()).unwrap(), "false null");
        assert_eq!(literal!(None::<i32>).unwrap(), "null");
    }
}
