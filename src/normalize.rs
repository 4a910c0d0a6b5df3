//! Reduction of arbitrary values to plain scalar/container trees.
//!
//! Opaque objects are flattened through the first capability they expose, in a
//! fixed priority order:
//!
//! 1. plain containers and scalars pass through; an object that *is* a
//!    container (AsContainer) yields that container
//! 2. SelfDescribingJSON, followed again if it produces another object
//! 3. ArrayConvertible
//! 4. JSONStringSerializable, decoded from its JSON text
//! 5. the generic fallback: reflected state encoded to JSON and decoded back
//!    (objects without reflection become an empty container)
//!
//! [`Normalizer::normalize_shallow`] applies one level of this;
//! [`Normalizer::normalize_deep`] applies it to every node, so its output never
//! contains an [`Opaque`](crate::Opaque).
//!
//! ## Guards
//!
//! An object reached again while it is still being flattened further up the
//! call chain fails with [`Error::CyclicValue`]. Nesting deeper than
//! [`NormalizeOptions::max_depth`] fails with [`Error::RecursionLimitExceeded`].
//!
//! ```rust
//! use scalarize::{normalize_deep, value, Reflected, Value};
//! use serde::Serialize;
//!
//! #[derive(Debug, Serialize)]
//! struct Tag { label: String }
//!
//! let input = value!({
//!     "tags": [(Value::opaque(Reflected(Tag { label: "new".into() })))]
//! });
//! let plain = normalize_deep(input).unwrap();
//! assert_eq!(plain, value!({ "tags": [{ "label": "new" }] }));
//! ```

use crate::{Container, Error, NormalizeOptions, Object, Opaque, Result, Value};

/// Value normalizer configured with [`NormalizeOptions`].
#[derive(Clone, Debug, Default)]
pub struct Normalizer {
    options: NormalizeOptions,
}

impl Normalizer {
    pub fn new(options: NormalizeOptions) -> Self {
        Normalizer { options }
    }

    #[must_use]
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Flattens one level: the result is a scalar or a container, but the
    /// container's entries are left as they are.
    ///
    /// # Errors
    ///
    /// [`Error::CyclicValue`] when an object describes itself as itself,
    /// [`Error::RecursionLimitExceeded`] for overly long object chains and
    /// [`Error::Json`] when an object produces malformed JSON text.
    pub fn normalize_shallow(&self, value: Value) -> Result<Value> {
        Walk::new(self.options.max_depth).shallow(value)
    }

    /// Flattens every node of the tree, preserving keys and their order.
    ///
    /// # Errors
    ///
    /// Same as [`Normalizer::normalize_shallow`], for any node of the tree.
    pub fn normalize_deep(&self, value: Value) -> Result<Value> {
        Walk::new(self.options.max_depth).deep(value)
    }
}

/// State of one normalization call: the objects currently being flattened and
/// the current nesting depth.
struct Walk {
    chain: Vec<usize>,
    depth: usize,
    max_depth: usize,
}

impl Walk {
    fn new(max_depth: usize) -> Self {
        Walk {
            chain: Vec::new(),
            depth: 0,
            max_depth,
        }
    }

    fn shallow(&mut self, value: Value) -> Result<Value> {
        match value {
            Value::Opaque(opaque) => {
                self.enter(&opaque)?;
                let produced = dispatch(opaque.object())?;
                let result = self.shallow(produced);
                self.leave();
                result
            }
            other => Ok(other),
        }
    }

    fn deep(&mut self, value: Value) -> Result<Value> {
        match value {
            Value::Opaque(opaque) => {
                self.enter(&opaque)?;
                let produced = dispatch(opaque.object())?;
                let result = self.deep(produced);
                self.leave();
                result
            }
            Value::Container(container) => {
                self.descend()?;
                let mut out = Container::with_capacity(container.len());
                for (key, item) in container {
                    out.insert(key, self.deep(item)?);
                }
                self.depth -= 1;
                Ok(Value::Container(out))
            }
            scalar => Ok(scalar),
        }
    }

    fn enter(&mut self, opaque: &Opaque) -> Result<()> {
        let id = opaque.id();
        if self.chain.contains(&id) {
            debug!(type_name = opaque.type_name(), "cycle detected during normalization");
            return Err(Error::cyclic(opaque.type_name()));
        }
        self.descend()?;
        self.chain.push(id);
        Ok(())
    }

    fn leave(&mut self) {
        self.chain.pop();
        self.depth -= 1;
    }

    fn descend(&mut self) -> Result<()> {
        if self.depth >= self.max_depth {
            debug!(limit = self.max_depth, "normalization depth limit reached");
            return Err(Error::recursion_limit(self.max_depth));
        }
        self.depth += 1;
        Ok(())
    }
}

/// Produces the next representation of an object from its highest-priority capability.
fn dispatch(object: &dyn Object) -> Result<Value> {
    if let Some(container) = object.as_container() {
        trace!(type_name = object.type_name(), "as container");
        return Ok(Value::Container(container));
    }
    if let Some(value) = object.to_json_value() {
        trace!(type_name = object.type_name(), "self-describing json");
        return Ok(value);
    }
    if let Some(container) = object.to_container() {
        trace!(type_name = object.type_name(), "container conversion");
        return Ok(Value::Container(container));
    }
    if let Some(text) = object.to_json_string() {
        trace!(type_name = object.type_name(), "json string");
        return Ok(serde_json::from_str(&text)?);
    }

    trace!(type_name = object.type_name(), "reflection fallback");
    let state = object
        .reflect()?
        .unwrap_or_else(|| serde_json::Value::Object(serde_json::Map::new()));
    let text = serde_json::to_string(&state)?;
    Ok(serde_json::from_str(&text)?)
}

/// One-level normalization with default options.
///
/// # Examples
///
/// ```rust
/// use scalarize::{normalize_shallow, value};
///
/// let list = value!([1, 2]);
/// assert_eq!(normalize_shallow(list.clone()).unwrap(), list);
/// ```
pub fn normalize_shallow(value: Value) -> Result<Value> {
    Normalizer::default().normalize_shallow(value)
}

/// Full normalization with default options.
///
/// # Examples
///
/// ```rust
/// use scalarize::{normalize_deep, Value};
///
/// assert_eq!(normalize_deep(Value::from("x")).unwrap(), Value::from("x"));
/// ```
pub fn normalize_deep(value: Value) -> Result<Value> {
    Normalizer::default().normalize_deep(value)
}
