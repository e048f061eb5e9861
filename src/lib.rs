//! # Vouch
//!
//! Composable validators for JSON values.
//!
//! ## Overview
//!
//! Vouch builds validators as chains of small tests. A chain is assembled
//! fluently from the [`Valid`] entry point and evaluated against a
//! [`serde_json::Value`], or against the absent value (`None`), which is
//! kept distinct from `null` throughout.
//!
//! Chains fail fast: the first rejecting test decides the result. For
//! structured data, [`Chain::json`] matches a value against a [`SchemaNode`]
//! tree and collects every mismatch into an [`ErrorReport`] keyed by path,
//! bounded by [`MatchOptions::max_errors`].
//!
//! ## Core Types
//!
//! - [`Chain`]: an ordered, append-only list of tests
//! - [`Valid`]: entry point whose functions start fresh chains
//! - [`Failure`]: why a value was rejected (message, report, or no tests)
//! - [`SchemaNode`]: the expected shape of a value for structural matching
//! - [`ErrorReport`]: path-keyed mismatches produced by the matcher
//! - [`TestRegistry`]: an application-built vocabulary of named tests
//!
//! ## Example
//!
//! ```rust
//! use vouch::{SchemaNode, Valid};
//! use serde_json::json;
//!
//! let user = Valid::json(SchemaNode::mapping([
//!     ("name", SchemaNode::from(Valid::not_blank())),
//!     ("age", SchemaNode::from(Valid::optional().integer().ge(0))),
//! ]));
//!
//! assert!(user.check(&json!({"name": "Ada"})));
//!
//! let err = user.verify(&json!({"name": "", "age": -1})).unwrap_err();
//! let report = err.failure.as_report().unwrap();
//! assert_eq!(report.message_at(".name"), Some("can't be blank"));
//! assert_eq!(report.message_at(".age"), Some("must be greater than or equal to 0"));
//! ```

pub mod chain;
pub mod error;
pub mod path;
pub mod registry;
pub mod schema;
pub mod valid;
pub mod validation;

mod render;

pub use chain::{Chain, Kind, NamedTest, Outcome, Test};
pub use error::{ErrorReport, Failure, ReportEntry, VerifyError};
pub use path::{JsonPath, PathSegment};
pub use registry::{RegistryError, TestRegistry};
pub use schema::{match_value, Predicate, SchemaNode};
pub use valid::Valid;
pub use validation::{MatchOptions, DEFAULT_MAX_ERRORS};

/// Type alias for chain evaluation results.
pub type ValidationResult<T> = stillwater::Validation<T, Failure>;
