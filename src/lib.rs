//! # scalarize
//!
//! Turns arbitrary values into plain, ordered trees and renders them as
//! compact, deterministic literals.
//!
//! ## What it does
//!
//! - **Normalization**: opaque objects are flattened through the capabilities
//!   they expose ([`Object`]) until only scalars and [`Container`]s remain
//! - **Literals**: any value renders to a stable bracket literal, for debug
//!   output, generated configuration and statement previews
//! - **Path trees**: flat `"a.b.c"` keyed mappings expand into nested containers
//!
//! ## Quick Start
//!
//! ```rust
//! use scalarize::{normalize_deep, to_literal, to_value, Reflected, Value};
//! use serde::Serialize;
//!
//! #[derive(Debug, Serialize)]
//! struct Point { x: i32, y: i32 }
//!
//! // Typed values go through serde
//! let typed = to_value(&vec![1, 2]).unwrap();
//!
//! // Opaque objects are flattened by normalization
//! let point = normalize_deep(Value::opaque(Reflected(Point { x: 1, y: 2 }))).unwrap();
//!
//! let text = to_literal(&[typed, point]).unwrap();
//! assert_eq!(text, "[\n  0 => 1,\n  1 => 2,\n] [\n  'x' => 1,\n  'y' => 2,\n]");
//! ```
//!
//! ### Dotted paths
//!
//! ```rust
//! use scalarize::{path, to_literal, Value};
//!
//! let tree = path::undot(vec![("app.name", Value::from("demo")), ("app.debug", Value::from(false))]);
//! let text = to_literal(&[Value::Container(tree)]).unwrap();
//! assert_eq!(text, "[\n  'app' => [\n    'name' => 'demo',\n    'debug' => false,\n  ],\n]");
//! ```
//!
//! ## Guarantees
//!
//! - Normalization output never contains [`Opaque`] nodes, and normalizing it
//!   again changes nothing
//! - Self-referential objects fail with [`Error::CyclicValue`] instead of
//!   recursing forever; nesting is bounded by [`NormalizeOptions::max_depth`]
//! - Literal output is a pure function of the value
//!
//! All operations are synchronous and allocate fresh output; inputs are never
//! mutated.
//!
//! ## Logging
//!
//! With the `tracing` feature enabled, capability dispatch and guard trips are
//! reported through `tracing` at trace and debug level.

#[macro_use]
mod tracing_macros;

pub mod container;
pub mod error;
pub mod literal;
pub mod macros;
pub mod normalize;
pub mod object;
pub mod options;
pub mod path;
pub mod query;
pub mod ser;
pub mod value;

pub use container::{Container, Key};
pub use error::{Error, Result};
pub use literal::{to_literal, LiteralSerializer};
pub use normalize::{normalize_deep, normalize_shallow, Normalizer};
pub use object::{Object, Opaque, Reflected};
pub use options::{LiteralOptions, NormalizeOptions};
pub use query::{interpolate, query_str, BoundStatement};
pub use ser::{to_value, ValueSerializer};
pub use value::{Number, Value};

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize, Debug)]
    struct Order {
        id: u32,
        lines: Vec<Line>,
        note: Option<String>,
    }

    #[derive(Serialize, Debug)]
    struct Line {
        sku: String,
        qty: u32,
    }

    #[test]
    fn test_typed_value_to_literal() {
        let order = Order {
            id: 1,
            lines: vec![Line {
                sku: "A-1".to_string(),
                qty: 2,
            }],
            note: None,
        };

        let text = to_literal(&[to_value(&order).unwrap()]).unwrap();
        assert_eq!(
            text,
            "[\n  'id' => 1,\n  'lines' => [\n    0 => [\n      'sku' => 'A-1',\n      'qty' => 2,\n    ],\n  ],\n  'note' => null,\n]"
        );
    }

    #[test]
    fn test_reflected_matches_typed() {
        let line = Line {
            sku: "B".to_string(),
            qty: 1,
        };
        let typed = to_value(&line).unwrap();
        let reflected = normalize_deep(Value::opaque(Reflected(line))).unwrap();
        assert_eq!(typed, reflected);
    }
}
