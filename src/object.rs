//! Opaque external objects and the capabilities they may expose.
//!
//! An [`Object`] is anything the crate cannot look inside directly. It tells the
//! normalizer how it wants to be flattened by overriding one or more optional
//! capability methods; every method defaults to "not supported".
//!
//! | Capability | Method | Normalized as |
//! |---|---|---|
//! | AsContainer | [`Object::as_container`] | the container, unchanged |
//! | SelfDescribingJSON | [`Object::to_json_value`] | the produced value |
//! | ArrayConvertible | [`Object::to_container`] | the produced container |
//! | JSONStringSerializable | [`Object::to_json_string`] | the decoded JSON text |
//! | (fallback) | [`Object::reflect`] | the reflected state after a JSON round trip |
//!
//! The normalizer checks them in exactly that order.
//!
//! ## Examples
//!
//! ```rust
//! use scalarize::{normalize_deep, value, Object, Value};
//!
//! #[derive(Debug)]
//! struct Money { cents: i64, currency: &'static str }
//!
//! impl Object for Money {
//!     fn to_json_value(&self) -> Option<Value> {
//!         Some(value!({ "amount": (self.cents as f64 / 100.0), "currency": (self.currency) }))
//!     }
//! }
//!
//! let price = Value::opaque(Money { cents: 1250, currency: "EUR" });
//! let plain = normalize_deep(price).unwrap();
//! assert_eq!(plain, value!({ "amount": 12.5, "currency": "EUR" }));
//! ```

use crate::{Container, Result, Value};
use chrono::{DateTime, TimeZone};
use num_bigint::BigInt;
use serde::Serialize;
use std::fmt;
use std::rc::Rc;

/// An external object whose shape is only known through its capabilities.
pub trait Object: fmt::Debug {
    /// Name used in literals and error messages.
    fn type_name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }

    /// The object already is a container (AsContainer).
    fn as_container(&self) -> Option<Container> {
        None
    }

    /// The object describes its own JSON-shaped form (SelfDescribingJSON).
    ///
    /// The produced value may itself contain opaque objects.
    fn to_json_value(&self) -> Option<Value> {
        None
    }

    /// The object converts itself into a container (ArrayConvertible).
    fn to_container(&self) -> Option<Container> {
        None
    }

    /// The object encodes itself as JSON text (JSONStringSerializable).
    fn to_json_string(&self) -> Option<String> {
        None
    }

    /// Structural reflection of the object's data members.
    ///
    /// Used by the generic normalization fallback, by literal rendering and by
    /// field selectors. Objects without reflectable state (handles, live
    /// connections) return `Ok(None)`; state that exists but cannot be
    /// encoded is an error.
    fn reflect(&self) -> Result<Option<serde_json::Value>> {
        Ok(None)
    }
}

/// Shared handle to an [`Object`].
///
/// Equality is identity: two handles are equal only when they point at the
/// same object.
#[derive(Clone)]
pub struct Opaque(Rc<dyn Object>);

impl Opaque {
    pub fn new<T: Object + 'static>(object: T) -> Self {
        Opaque(Rc::new(object))
    }

    pub fn from_rc(object: Rc<dyn Object>) -> Self {
        Opaque(object)
    }

    /// Identity of the underlying object, stable for its lifetime.
    #[inline]
    #[must_use]
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }

    #[inline]
    #[must_use]
    pub fn object(&self) -> &dyn Object {
        self.0.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &str {
        self.0.type_name()
    }
}

impl PartialEq for Opaque {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl fmt::Debug for Opaque {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Opaque").field(&self.0).finish()
    }
}

impl<T: Object + 'static> From<Rc<T>> for Opaque {
    fn from(object: Rc<T>) -> Self {
        Opaque(object)
    }
}

/// Exposes any `Serialize` type as an object whose state is reached only
/// through reflection.
///
/// # Examples
///
/// ```rust
/// use scalarize::{normalize_deep, value, Reflected, Value};
/// use serde::Serialize;
///
/// #[derive(Debug, Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let plain = normalize_deep(Value::opaque(Reflected(Point { x: 1, y: 2 }))).unwrap();
/// assert_eq!(plain, value!({ "x": 1, "y": 2 }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reflected<T>(pub T);

impl<T: Serialize + fmt::Debug> Object for Reflected<T> {
    fn type_name(&self) -> &str {
        short_type_name(std::any::type_name::<T>())
    }

    fn reflect(&self) -> Result<Option<serde_json::Value>> {
        Ok(Some(serde_json::to_value(&self.0)?))
    }
}

impl<Tz> Object for DateTime<Tz>
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    fn type_name(&self) -> &str {
        "DateTime"
    }

    fn to_json_value(&self) -> Option<Value> {
        Some(Value::String(self.to_rfc3339()))
    }

    fn reflect(&self) -> Result<Option<serde_json::Value>> {
        Ok(Some(serde_json::Value::String(self.to_rfc3339())))
    }
}

impl Object for BigInt {
    fn type_name(&self) -> &str {
        "BigInt"
    }

    // Quoted so the digits survive a JSON decode without losing precision.
    fn to_json_string(&self) -> Option<String> {
        Some(format!("\"{}\"", self))
    }

    fn reflect(&self) -> Result<Option<serde_json::Value>> {
        Ok(Some(serde_json::Value::String(self.to_string())))
    }
}

/// Strips module paths and generic arguments: `a::b::Point<c::D>` becomes `Point`.
fn short_type_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[derive(Debug)]
    struct Handle;

    impl Object for Handle {}

    #[test]
    fn test_default_type_name() {
        assert_eq!(Handle.type_name(), "Handle");
        assert_eq!(short_type_name("alloc::vec::Vec<core::option::Option<u8>>"), "Vec");
    }

    #[test]
    fn test_identity() {
        let a = Opaque::new(Handle);
        let b = a.clone();
        let c = Opaque::new(Handle);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_datetime_describes_itself() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        assert_eq!(
            at.to_json_value(),
            Some(Value::from("2024-05-01T12:30:00+00:00"))
        );
    }

    #[test]
    fn test_bigint_json_string() {
        let big: BigInt = "123456789012345678901234567890".parse().unwrap();
        assert_eq!(
            big.to_json_string().as_deref(),
            Some("\"123456789012345678901234567890\"")
        );
    }
}
