//! Ordered container type shared by normalization, rendering and path trees.
//!
//! This module provides [`Container`], a wrapper around [`IndexMap`] keyed by
//! [`Key`]. A container plays both roles of a list (implicit sequential integer
//! keys) and a record (explicit string keys), and may mix the two.
//!
//! ## Ordering
//!
//! - Iteration follows insertion order
//! - Re-inserting an existing key replaces its value in place
//! - Equality is order-sensitive: `[a, b]` and `[b, a]` are different containers
//!
//! ## Examples
//!
//! ```rust
//! use scalarize::{Container, Key, Value};
//!
//! let mut list = Container::new();
//! list.push(Value::from("a"));
//! list.push(Value::from("b"));
//! assert!(list.is_list());
//!
//! let mut record = Container::new();
//! record.insert("name", Value::from("Alice"));
//! record.insert(7, Value::from(true));
//! assert_eq!(record.keys().cloned().collect::<Vec<_>>(), vec![Key::from("name"), Key::Index(7)]);
//! ```

use crate::Value;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Key of a container entry: an implicit index or an explicit name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    /// Builds a key from one path segment.
    ///
    /// Segments written as a canonical decimal integer (no sign on zero, no
    /// leading zeros, no `+`) become [`Key::Index`]; everything else is a name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarize::Key;
    ///
    /// assert_eq!(Key::from_segment("3"), Key::Index(3));
    /// assert_eq!(Key::from_segment("-12"), Key::Index(-12));
    /// assert_eq!(Key::from_segment("03"), Key::Name("03".to_string()));
    /// assert_eq!(Key::from_segment("name"), Key::Name("name".to_string()));
    /// ```
    #[must_use]
    pub fn from_segment(segment: &str) -> Self {
        match segment.parse::<i64>() {
            Ok(index) if index.to_string() == segment => Key::Index(index),
            _ => Key::Name(segment.to_string()),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    #[inline]
    #[must_use]
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Index(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{}", i),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Index(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Index(value as i64)
    }
}

impl From<usize> for Key {
    fn from(value: usize) -> Self {
        Key::Index(value as i64)
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Name(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Name(value)
    }
}

impl From<&Key> for Key {
    fn from(value: &Key) -> Self {
        value.clone()
    }
}

/// An ordered sequence of `(Key, Value)` pairs.
///
/// # Examples
///
/// ```rust
/// use scalarize::{Container, Value};
///
/// let mut map = Container::new();
/// map.insert("first", Value::from(1));
/// map.insert("second", Value::from(2));
///
/// let keys: Vec<String> = map.keys().map(|k| k.to_string()).collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Container {
    entries: IndexMap<Key, Value>,
    next_index: i64,
}

impl Container {
    /// Creates an empty `Container`.
    #[must_use]
    pub fn new() -> Self {
        Container {
            entries: IndexMap::new(),
            next_index: 0,
        }
    }

    /// Creates an empty `Container` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Container {
            entries: IndexMap::with_capacity(capacity),
            next_index: 0,
        }
    }

    /// Inserts a key-value pair into the container.
    ///
    /// If the container already held this key, the value is replaced in place
    /// and the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarize::{Container, Value};
    ///
    /// let mut map = Container::new();
    /// assert!(map.insert("key", Value::from(42)).is_none());
    /// assert!(map.insert("key", Value::from(43)).is_some());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert<K: Into<Key>>(&mut self, key: K, value: Value) -> Option<Value> {
        let key = key.into();
        if let Key::Index(index) = key {
            if index >= self.next_index {
                self.next_index = index.saturating_add(1);
            }
        }
        self.entries.insert(key, value)
    }

    /// Appends a value under the next free index.
    ///
    /// The next index is one past the largest integer key ever inserted, or 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarize::{Container, Key, Value};
    ///
    /// let mut map = Container::new();
    /// map.insert(5, Value::from("five"));
    /// map.push(Value::from("six"));
    /// assert_eq!(map.get(6), Some(&Value::from("six")));
    /// ```
    pub fn push(&mut self, value: Value) {
        let index = self.next_index;
        self.insert(Key::Index(index), value);
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get<K: Into<Key>>(&self, key: K) -> Option<&Value> {
        self.entries.get(&key.into())
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut<K: Into<Key>>(&mut self, key: K) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())
    }

    #[must_use]
    pub fn contains_key<K: Into<Key>>(&self, key: K) -> bool {
        self.entries.contains_key(&key.into())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` when the keys are exactly `0, 1, 2, ...` in order.
    ///
    /// An empty container is a list.
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.entries
            .keys()
            .enumerate()
            .all(|(position, key)| *key == Key::Index(position as i64))
    }

    /// Returns an iterator over the keys, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, Key, Value> {
        self.entries.keys()
    }

    /// Returns an iterator over the values, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, Key, Value> {
        self.entries.values()
    }

    /// Returns an iterator over the key-value pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, Key, Value> {
        self.entries.iter()
    }
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Serialize for Container {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_list() {
            use serde::ser::SerializeSeq;
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for element in self.values() {
                seq.serialize_element(element)?;
            }
            seq.end()
        } else {
            use serde::ser::SerializeMap;
            let mut map = serializer.serialize_map(Some(self.len()))?;
            for (k, v) in self.iter() {
                map.serialize_entry(&k.to_string(), v)?;
            }
            map.end()
        }
    }
}

impl IntoIterator for Container {
    type Item = (Key, Value);
    type IntoIter = indexmap::map::IntoIter<Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Container {
    type Item = (&'a Key, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, Key, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K: Into<Key>> FromIterator<(K, Value)> for Container {
    fn from_iter<T: IntoIterator<Item = (K, Value)>>(iter: T) -> Self {
        let mut container = Container::new();
        for (key, value) in iter {
            container.insert(key, value);
        }
        container
    }
}

impl FromIterator<Value> for Container {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut container = Container::new();
        for value in iter {
            container.push(value);
        }
        container
    }
}
