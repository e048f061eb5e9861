//! Structural matching of values against schema trees.
//!
//! A [`SchemaNode`] tree describes the expected shape of a value. Matching
//! walks the value and the schema together and collects every mismatch into
//! an [`ErrorReport`](crate::ErrorReport) keyed by path, instead of stopping
//! at the first one.
//!
//! # Example
//!
//! ```rust
//! use vouch::{match_value, MatchOptions, SchemaNode, Valid};
//! use serde_json::json;
//!
//! let schema = SchemaNode::mapping([
//!     ("name", SchemaNode::from(Valid::not_blank())),
//!     ("tags", SchemaNode::from(Valid::array_of(&Valid::string()))),
//!     ("version", SchemaNode::from(2i64)),
//! ]);
//!
//! let report = match_value(
//!     &schema,
//!     &json!({"name": " ", "tags": ["a", 1]}),
//!     &MatchOptions::default(),
//! );
//!
//! assert_eq!(report.len(), 3);
//! assert_eq!(report.message_at(".name"), Some("can't be blank"));
//! assert_eq!(report.message_at(".tags"), Some("item 1 must be a string"));
//! assert_eq!(report.message_at(".version"), Some("is missing"));
//! ```

mod matcher;
mod node;

pub use matcher::match_value;
pub use node::{Predicate, SchemaNode};
