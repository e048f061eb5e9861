//! Recursive, path-aware matching of values against schema trees.
//!
//! Unlike chain evaluation, matching does not stop at the first mismatch: it
//! keeps walking the tree and records every independent mismatch at its
//! path, until the report reaches the configured ceiling.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::node::SchemaNode;
use crate::chain::{strict_equal, Chain, Kind, Outcome, Test};
use crate::error::{ErrorReport, Failure};
use crate::path::JsonPath;
use crate::render::escape;
use crate::validation::MatchOptions;

/// Matches `value` against `schema` and returns every mismatch found.
///
/// Pass `&value` for a present value or `None` for an absent one. Each call
/// builds its own report, so one schema can be matched from many threads.
///
/// # Example
///
/// ```rust
/// use vouch::{match_value, MatchOptions, SchemaNode};
/// use serde_json::json;
///
/// let schema = SchemaNode::from(json!([12, 13]));
///
/// let report = match_value(&schema, &json!([12, 14]), &MatchOptions::default());
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.message_at("[1]"), Some("must equal 13"));
///
/// let report = match_value(&schema, &json!([12]), &MatchOptions::default());
/// assert_eq!(report.message_at("."), Some("has 1 item(s), expected 2"));
/// ```
pub fn match_value<'a>(
    schema: &SchemaNode,
    value: impl Into<Option<&'a Value>>,
    options: &MatchOptions,
) -> ErrorReport {
    let mut matcher = Matcher {
        options,
        report: ErrorReport::new(),
    };
    matcher.match_field(&JsonPath::root(), value.into(), schema);
    matcher.report
}

/// Per-call matching state.
struct Matcher<'o> {
    options: &'o MatchOptions,
    report: ErrorReport,
}

impl Matcher<'_> {
    fn is_full(&self) -> bool {
        self.report.len() >= self.options.max_errors()
    }

    fn record(&mut self, path: &JsonPath, value: Option<&Value>, message: impl Into<String>) {
        if self.is_full() {
            return;
        }
        if self.report.record(path, value, message) && self.is_full() {
            tracing::debug!(
                max_errors = self.options.max_errors(),
                %path,
                "error ceiling reached, matching stops"
            );
        }
    }

    fn match_field(&mut self, path: &JsonPath, value: Option<&Value>, schema: &SchemaNode) {
        if self.is_full() {
            return;
        }
        match schema {
            SchemaNode::Literal(expected) => match expected {
                Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                    if !strict_equal(value, Some(expected)) {
                        self.record(path, value, format!("must equal {}", escape(Some(expected))));
                    }
                }
                other => self.record(
                    path,
                    value,
                    format!(
                        "invalid schema: literal must be a scalar, found {}",
                        Kind::of(Some(other))
                    ),
                ),
            },
            SchemaNode::Absent => {
                if value.is_some() {
                    self.record(path, value, "must be undefined");
                }
            }
            SchemaNode::Null => {
                if !matches!(value, Some(Value::Null)) {
                    self.record(path, value, "must be null");
                }
            }
            SchemaNode::Pattern(regex) => match value {
                Some(Value::String(s)) => {
                    if !regex.is_match(s) {
                        self.record(path, value, format!("must match /{}/", regex));
                    }
                }
                _ => self.record(path, value, "must be a string"),
            },
            SchemaNode::Predicate(predicate) => {
                if let Some(message) = predicate.call(value) {
                    self.record(path, value, message);
                }
            }
            SchemaNode::Chain(chain) => self.match_chain(path, value, chain),
            SchemaNode::Sequence(items) => self.match_sequence(path, value, items),
            SchemaNode::Mapping(fields) => self.match_mapping(path, value, fields),
        }
    }

    fn match_chain(&mut self, path: &JsonPath, value: Option<&Value>, chain: &Chain) {
        match chain.evaluate(value).into_result() {
            Ok(()) => {}
            Err(Failure::Report(nested)) => {
                for entry in nested {
                    self.record(&path.join(&entry.path), entry.value.as_ref(), entry.message);
                }
            }
            Err(failure) => self.record(path, value, failure.to_string()),
        }
    }

    fn match_sequence(&mut self, path: &JsonPath, value: Option<&Value>, items: &[SchemaNode]) {
        let elements = match value {
            Some(Value::Array(elements)) => elements,
            Some(Value::Null) => return self.record(path, value, "can't be null"),
            _ => return self.record(path, value, "must be an array"),
        };

        if elements.len() != items.len() {
            self.record(
                path,
                value,
                format!("has {} item(s), expected {}", elements.len(), items.len()),
            );
        }

        for (i, (element, item)) in elements.iter().zip(items).enumerate() {
            if self.is_full() {
                break;
            }
            self.match_field(&path.push_index(i), Some(element), item);
        }
    }

    fn match_mapping(
        &mut self,
        path: &JsonPath,
        value: Option<&Value>,
        fields: &IndexMap<String, SchemaNode>,
    ) {
        let object: &Map<String, Value> = match value {
            Some(Value::Object(object)) => object,
            Some(Value::Null) => return self.record(path, value, "can't be null"),
            _ => return self.record(path, value, "must be an object"),
        };

        for (key, node) in fields {
            if self.is_full() {
                break;
            }
            let child = path.push_field(key.as_str());
            match object.get(key) {
                Some(field) => self.match_field(&child, Some(field), node),
                None if accepts_absent(node) => {}
                None => self.record(&child, None, "is missing"),
            }
        }

        if !self.options.is_strict() {
            return;
        }
        for (key, field) in object {
            if self.is_full() {
                break;
            }
            if !fields.contains_key(key) {
                self.record(&path.push_field(key.as_str()), Some(field), "is not allowed");
            }
        }
    }
}

/// A missing key is fine when the schema asks for absence or its chain
/// accepts the absent value (as `optional()` does).
fn accepts_absent(node: &SchemaNode) -> bool {
    match node {
        SchemaNode::Absent => true,
        SchemaNode::Chain(chain) => chain.check(None),
        _ => false,
    }
}

impl Chain {
    /// Appends a test matching the value against `schema` with default options.
    ///
    /// On mismatch the failure is a [`Failure::Report`] holding every
    /// mismatch keyed by rendered path.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vouch::Valid;
    /// use serde_json::json;
    ///
    /// let chain = Valid::json(json!({"a": 1}));
    /// assert!(chain.check(&json!({"a": 1})));
    ///
    /// let err = chain.verify(&json!({"a": 2})).unwrap_err();
    /// let report = err.failure.as_report().unwrap();
    /// assert_eq!(report.len(), 1);
    /// assert_eq!(report.message_at(".a"), Some("must equal 1"));
    /// assert_eq!(report.get(".a").unwrap().value, Some(json!(2)));
    /// ```
    pub fn json(self, schema: impl Into<SchemaNode>) -> Self {
        self.json_with(schema, MatchOptions::default())
    }

    /// Appends a test matching the value against `schema` with `options`.
    pub fn json_with(self, schema: impl Into<SchemaNode>, options: MatchOptions) -> Self {
        let schema = schema.into();
        self.add_test(Test::new("json", move |value| {
            let report = match_value(&schema, value, &options);
            if report.is_empty() {
                Outcome::Pass
            } else {
                Outcome::Fail(Failure::Report(report))
            }
        }))
    }
}
