//! Error types for normalization, literal rendering and path-tree building.
//!
//! Every failure in this crate is local and synchronous: the call that hit the
//! problem returns it, nothing is retried and no partial result is produced.
//!
//! ## Error Categories
//!
//! - **Structural**: a self-referential object graph ([`Error::CyclicValue`]) or
//!   nesting deeper than the configured limit ([`Error::RecursionLimitExceeded`])
//! - **Rendering**: a value with no literal form ([`Error::UnrepresentableValue`])
//! - **Re-keying**: a selector that found nothing ([`Error::MissingField`]) or
//!   selected something that cannot be a key ([`Error::InvalidKey`])
//! - **Capability output**: an object that produced malformed JSON ([`Error::Json`])
//!
//! ## Examples
//!
//! ```rust
//! use scalarize::{path, value, Error};
//!
//! let items = vec![("first".to_string(), value!({ "id": 1 }))];
//! let result = path::replace_key(items, path::Selector::field("slug"), None);
//!
//! assert!(matches!(result, Err(Error::MissingField { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors raised while normalizing, rendering or re-keying values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An opaque object was reached again while it was still being normalized
    #[error("Cyclic value: `{type_name}` refers back to itself")]
    CyclicValue { type_name: String },

    /// Nesting went deeper than the configured maximum
    #[error("Recursion limit exceeded: nesting deeper than {limit} levels")]
    RecursionLimitExceeded { limit: usize },

    /// The value has no literal representation
    #[error("Unrepresentable value: {0}")]
    UnrepresentableValue(String),

    /// A field selector found no such field on the item
    #[error("Missing field `{field}`")]
    MissingField { field: String },

    /// The selected value cannot be used as a key
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// An object capability produced text that is not valid JSON
    #[error("JSON error: {0}")]
    Json(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a cycle error for the object with the given type name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarize::Error;
    ///
    /// let err = Error::cyclic("TreeNode");
    /// assert!(err.to_string().contains("TreeNode"));
    /// ```
    pub fn cyclic(type_name: &str) -> Self {
        Error::CyclicValue {
            type_name: type_name.to_string(),
        }
    }

    /// Creates a depth-guard error for the given limit.
    pub fn recursion_limit(limit: usize) -> Self {
        Error::RecursionLimitExceeded { limit }
    }

    /// Creates an error for a value with no literal representation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarize::Error;
    ///
    /// let err = Error::unrepresentable("open socket");
    /// assert!(err.to_string().contains("open socket"));
    /// ```
    pub fn unrepresentable(msg: &str) -> Self {
        Error::UnrepresentableValue(msg.to_string())
    }

    /// Creates a missing-field error.
    pub fn missing_field(field: &str) -> Self {
        Error::MissingField {
            field: field.to_string(),
        }
    }

    /// Creates an invalid-key error.
    pub fn invalid_key(msg: &str) -> Self {
        Error::InvalidKey(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
