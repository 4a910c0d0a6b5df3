//! Configuration options for normalization and literal rendering.
//!
//! - [`NormalizeOptions`]: recursion guard for [`Normalizer`](crate::Normalizer)
//! - [`LiteralOptions`]: indentation used by [`LiteralSerializer`](crate::LiteralSerializer)
//!
//! ## Examples
//!
//! ```rust
//! use scalarize::{LiteralOptions, LiteralSerializer, NormalizeOptions, Normalizer, value};
//!
//! let normalizer = Normalizer::new(NormalizeOptions::new().with_max_depth(16));
//! let plain = normalizer.normalize_deep(value!({ "a": [1, 2] })).unwrap();
//!
//! let serializer = LiteralSerializer::new(LiteralOptions::new().with_indent(4));
//! let text = serializer.to_literal(&[plain]).unwrap();
//! assert!(text.contains("    'a' => ["));
//! ```

/// Nesting depth allowed by default before normalization gives up.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration options for value normalization.
///
/// # Examples
///
/// ```rust
/// use scalarize::NormalizeOptions;
///
/// let options = NormalizeOptions::new();
/// assert_eq!(options.max_depth, 256);
///
/// let shallow = NormalizeOptions::new().with_max_depth(8);
/// assert_eq!(shallow.max_depth, 8);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizeOptions {
    pub max_depth: usize,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        NormalizeOptions {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl NormalizeOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many nested levels (containers and object hops) may be entered
    /// before [`Error::RecursionLimitExceeded`](crate::Error::RecursionLimitExceeded).
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Configuration options for literal rendering.
///
/// # Examples
///
/// ```rust
/// use scalarize::LiteralOptions;
///
/// let options = LiteralOptions::new();
/// assert_eq!(options.indent, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralOptions {
    pub indent: usize,
}

impl Default for LiteralOptions {
    fn default() -> Self {
        LiteralOptions { indent: 2 }
    }
}

impl LiteralOptions {
    /// Creates default options (2-space indentation).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per nesting level).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use scalarize::LiteralOptions;
    ///
    /// let options = LiteralOptions::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
