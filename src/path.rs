//! Building and re-keying nested containers from flat, dotted keys.
//!
//! - [`undot`] expands `"a.b.c" => 1` style mappings into nested containers
//! - [`rekey`] prefixes every key of a mapping
//! - [`replace_key`] re-keys a mapping by a field of each item
//!
//! All three keep the input's iteration order, and all three resolve key
//! collisions by letting the last write win.
//!
//! ## Examples
//!
//! ```rust
//! use scalarize::{path, value, Value};
//!
//! let tree = path::undot(vec![
//!     ("db.host", Value::from("localhost")),
//!     ("db.port", Value::from(5432)),
//!     ("debug", Value::from(true)),
//! ]);
//! assert_eq!(
//!     Value::Container(tree),
//!     value!({ "db": { "host": "localhost", "port": 5432 }, "debug": true })
//! );
//! ```

use crate::{Container, Error, Key, Number, Result, Value};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;

/// Expands dot-delimited keys into nested containers.
///
/// Each key is split on `.`; containers are created (or reused) for every
/// segment but the last, and the last segment receives the value. Segments
/// spelled as a canonical integer become index keys.
///
/// When something other than a container already sits where an intermediate
/// container is needed, it is discarded and replaced by a fresh container.
/// A later, shorter key likewise replaces a container built earlier.
///
/// # Examples
///
/// ```rust
/// use scalarize::{path, value, Value};
///
/// let tree = path::undot(vec![("a.b", Value::from(1)), ("a.b.c", Value::from(2))]);
/// assert_eq!(Value::Container(tree), value!({ "a": { "b": { "c": 2 } } }));
/// ```
pub fn undot<I, S>(flat: I) -> Container
where
    I: IntoIterator<Item = (S, Value)>,
    S: AsRef<str>,
{
    let mut root = Container::new();
    for (dotted, value) in flat {
        let segments: Vec<&str> = dotted.as_ref().split('.').collect();
        set_path(&mut root, &segments, value);
    }
    root
}

fn set_path(node: &mut Container, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [last] => {
            node.insert(Key::from_segment(last), value);
        }
        [head, rest @ ..] => {
            let key = Key::from_segment(head);
            match node.get_mut(&key) {
                Some(Value::Container(child)) => set_path(child, rest, value),
                Some(slot) => {
                    trace!(segment = *head, "replacing scalar with container");
                    *slot = Value::Container(branch(rest, value));
                }
                None => {
                    node.insert(key, Value::Container(branch(rest, value)));
                }
            }
        }
    }
}

fn branch(segments: &[&str], value: Value) -> Container {
    let mut child = Container::new();
    set_path(&mut child, segments, value);
    child
}

/// Prefix applied by [`rekey`] and [`replace_key`]: a fixed string or a
/// function of the original key.
pub enum Prefix<'a> {
    Fixed(Cow<'a, str>),
    Computed(Box<dyn FnMut(&str) -> String + 'a>),
}

impl<'a> Prefix<'a> {
    /// A prefix computed per key.
    pub fn with<F>(f: F) -> Self
    where
        F: FnMut(&str) -> String + 'a,
    {
        Prefix::Computed(Box::new(f))
    }

    fn for_key(&mut self, key: &str) -> Cow<'_, str> {
        match self {
            Prefix::Fixed(prefix) => Cow::Borrowed(&**prefix),
            Prefix::Computed(f) => Cow::Owned(f(key)),
        }
    }
}

impl<'a> From<&'a str> for Prefix<'a> {
    fn from(prefix: &'a str) -> Self {
        Prefix::Fixed(Cow::Borrowed(prefix))
    }
}

impl From<String> for Prefix<'_> {
    fn from(prefix: String) -> Self {
        Prefix::Fixed(Cow::Owned(prefix))
    }
}

impl fmt::Debug for Prefix<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Prefix::Fixed(prefix) => f.debug_tuple("Fixed").field(prefix).finish(),
            Prefix::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

/// Replaces every key `k` with `prefix(k) + k`, keeping values and order.
///
/// # Examples
///
/// ```rust
/// use scalarize::path::{rekey, Prefix};
///
/// let items = vec![("x", 1), ("y", 2)];
/// let rekeyed = rekey(items, "pre_");
/// assert_eq!(rekeyed.keys().collect::<Vec<_>>(), vec!["pre_x", "pre_y"]);
///
/// let upper = rekey(vec![("id", 1)], Prefix::with(|k| k.to_uppercase()));
/// assert_eq!(upper.get("IDid"), Some(&1));
/// ```
pub fn rekey<'a, I, K, V, P>(items: I, prefix: P) -> IndexMap<String, V>
where
    I: IntoIterator<Item = (K, V)>,
    K: fmt::Display,
    P: Into<Prefix<'a>>,
{
    let mut prefix = prefix.into();
    let mut out = IndexMap::new();
    for (key, value) in items {
        let key = key.to_string();
        let new_key = format!("{}{}", prefix.for_key(&key), key);
        out.insert(new_key, value);
    }
    out
}

/// How [`replace_key`] picks the new key of an item.
pub enum Selector<'a> {
    /// Read a named field of the item.
    Field(Cow<'a, str>),
    /// Compute the key from the item.
    With(Box<dyn FnMut(&Value) -> String + 'a>),
}

impl<'a> Selector<'a> {
    pub fn field<S: Into<Cow<'a, str>>>(name: S) -> Self {
        Selector::Field(name.into())
    }

    pub fn with<F>(f: F) -> Self
    where
        F: FnMut(&Value) -> String + 'a,
    {
        Selector::With(Box::new(f))
    }

    fn select(&mut self, item: &Value) -> Result<String> {
        match self {
            Selector::Field(name) => key_text(&field_of(item, name)?),
            Selector::With(f) => Ok(f(item)),
        }
    }
}

impl fmt::Debug for Selector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Selector::With(_) => f.write_str("With(..)"),
        }
    }
}

/// Re-keys items by a field of each item (or a function of it), with an
/// optional prefix. The prefix function receives the item's original key.
///
/// Field lookup reads the container entry of that name; for an opaque object it
/// reads the property of that name from the object's reflected state.
///
/// # Errors
///
/// [`Error::MissingField`] if an item has no such field, and
/// [`Error::InvalidKey`] if the field holds something that cannot be a key.
///
/// # Examples
///
/// ```rust
/// use scalarize::{path, value};
///
/// let users = vec![
///     (0, value!({ "id": 7, "name": "Ann" })),
///     (1, value!({ "id": 9, "name": "Bob" })),
/// ];
/// let by_id = path::replace_key(users, path::Selector::field("id"), Some("user_".into())).unwrap();
/// assert_eq!(by_id.keys().collect::<Vec<_>>(), vec!["user_7", "user_9"]);
/// ```
pub fn replace_key<'a, I, K>(
    items: I,
    mut selector: Selector<'_>,
    prefix: Option<Prefix<'a>>,
) -> Result<IndexMap<String, Value>>
where
    I: IntoIterator<Item = (K, Value)>,
    K: fmt::Display,
{
    let mut prefix = prefix;
    let mut out = IndexMap::new();
    for (key, item) in items {
        let selected = selector.select(&item)?;
        let new_key = match prefix.as_mut() {
            Some(p) => format!("{}{}", p.for_key(&key.to_string()), selected),
            None => selected,
        };
        out.insert(new_key, item);
    }
    Ok(out)
}

fn field_of(item: &Value, name: &str) -> Result<Value> {
    match item {
        Value::Container(c) => c
            .get(Key::from_segment(name))
            .cloned()
            .ok_or_else(|| Error::missing_field(name)),
        Value::Opaque(o) => o
            .object()
            .reflect()?
            .and_then(|state| match state {
                serde_json::Value::Object(mut fields) => fields.remove(name),
                _ => None,
            })
            .map(serde_json::from_value::<Value>)
            .transpose()?
            .ok_or_else(|| Error::missing_field(name)),
        _ => Err(Error::missing_field(name)),
    }
}

/// Text of a value used as a key: scalars only, booleans as `1` / empty.
fn key_text(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(Number::Integer(i)) => Ok(i.to_string()),
        Value::Number(Number::Float(f)) => Ok(f.to_string()),
        Value::Bool(true) => Ok("1".to_string()),
        Value::Bool(false) | Value::Null => Ok(String::new()),
        Value::Container(_) => Err(Error::invalid_key("a container cannot be used as a key")),
        Value::Opaque(o) => Err(Error::invalid_key(&format!(
            "`{}` cannot be used as a key",
            o.type_name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_undot_merges_siblings() {
        let tree = undot(vec![("a.b.c", Value::from(1)), ("a.b.d", Value::from(2))]);
        assert_eq!(Value::Container(tree), value!({ "a": { "b": { "c": 1, "d": 2 } } }));
    }

    #[test]
    fn test_undot_scalar_replaced_by_container() {
        let tree = undot(vec![("a.b", Value::from(1)), ("a.b.c", Value::from(2))]);
        assert_eq!(Value::Container(tree), value!({ "a": { "b": { "c": 2 } } }));
    }

    #[test]
    fn test_undot_replacement_keeps_position() {
        let tree = undot(vec![
            ("a.b", Value::from(1)),
            ("a.x", Value::from(2)),
            ("a.b.c.d", Value::from(3)),
        ]);
        assert_eq!(
            Value::Container(tree),
            value!({ "a": { "b": { "c": { "d": 3 } }, "x": 2 } })
        );
    }

    #[test]
    fn test_undot_null_replaced_by_container() {
        let tree = undot(vec![("a", Value::Null), ("a.b", Value::from(1))]);
        assert_eq!(Value::Container(tree), value!({ "a": { "b": 1 } }));
    }

    #[test]
    fn test_undot_shorter_key_overwrites_container() {
        let tree = undot(vec![("a.b.c", Value::from(1)), ("a.b", Value::from("flat"))]);
        assert_eq!(Value::Container(tree), value!({ "a": { "b": "flat" } }));
    }

    #[test]
    fn test_undot_first_seen_order() {
        let tree = undot(vec![
            ("z.one", Value::from(1)),
            ("a", Value::from(2)),
            ("z.two", Value::from(3)),
        ]);
        let keys: Vec<String> = tree.keys().map(|k| k.to_string()).collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_undot_numeric_segments() {
        let tree = undot(vec![("items.0", Value::from("a")), ("items.1", Value::from("b"))]);
        let items = tree.get("items").and_then(Value::as_container).unwrap();
        assert!(items.is_list());
    }

    #[test]
    fn test_undot_merges_into_existing_container_value() {
        let tree = undot(vec![("a", value!({ "x": 1 })), ("a.y", Value::from(2))]);
        assert_eq!(Value::Container(tree), value!({ "a": { "x": 1, "y": 2 } }));
    }

    #[test]
    fn test_fixed_prefix_for_key() {
        let mut borrowed = Prefix::from("pre_");
        assert_eq!(borrowed.for_key("x"), "pre_");

        let mut owned = Prefix::from(String::from("own_"));
        assert_eq!(owned.for_key("y"), "own_");
    }

    #[test]
    fn test_rekey_collision_last_write_wins() {
        let rekeyed = rekey(vec![("a", 1), ("b", 2), ("a", 3)], "p.");
        assert_eq!(rekeyed.len(), 2);
        assert_eq!(rekeyed.get_index(0), Some((&"p.a".to_string(), &3)));
    }

    #[test]
    fn test_rekey_computed_prefix_sees_key() {
        let mut seen = Vec::new();
        let rekeyed = rekey(
            vec![(1, "x"), (2, "y")],
            Prefix::with(|k| {
                seen.push(k.to_string());
                "#".to_string()
            }),
        );
        assert_eq!(rekeyed.keys().collect::<Vec<_>>(), vec!["#1", "#2"]);
        assert_eq!(seen, vec!["1", "2"]);
    }

    #[test]
    fn test_replace_key_with_closure() {
        let items = vec![("a", Value::from(10)), ("b", Value::from(20))];
        let out = replace_key(
            items,
            Selector::with(|v| format!("n{}", v.as_i64().unwrap_or_default())),
            None,
        )
        .unwrap();
        assert_eq!(out.keys().collect::<Vec<_>>(), vec!["n10", "n20"]);
    }

    #[test]
    fn test_replace_key_missing_field() {
        let items = vec![("a", value!({ "id": 1 })), ("b", value!({ "name": "x" }))];
        let err = replace_key(items, Selector::field("id"), None).unwrap_err();
        assert_eq!(err, Error::missing_field("id"));
    }

    #[test]
    fn test_replace_key_container_is_invalid_key() {
        let items = vec![("a", value!({ "id": [1] }))];
        let err = replace_key(items, Selector::field("id"), None).unwrap_err();
        assert!(matches!(err, Error::InvalidKey(_)));
    }

    #[test]
    fn test_key_text() {
        assert_eq!(key_text(&Value::Bool(true)).unwrap(), "1");
        assert_eq!(key_text(&Value::Bool(false)).unwrap(), "");
        assert_eq!(key_text(&Value::from(2.5)).unwrap(), "2.5");
    }
}
