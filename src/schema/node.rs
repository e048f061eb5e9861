//! Schema nodes describing the expected shape of a value.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use regex::Regex;
use serde_json::Value;

use crate::chain::{Chain, NamedTest};

/// Type alias for the function stored in a [`Predicate`].
pub(crate) type PredicateFn = dyn Fn(Option<&Value>) -> Option<String> + Send + Sync;

/// A schema leaf that decides its own message.
///
/// The function returns `None` (or an empty message) to accept the value.
#[derive(Clone)]
pub struct Predicate(Arc<PredicateFn>);

impl Predicate {
    /// Runs the predicate, returning a non-empty message on failure.
    pub fn call(&self, value: Option<&Value>) -> Option<String> {
        (self.0)(value).filter(|message| !message.is_empty())
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate(..)")
    }
}

/// One node of a schema tree.
///
/// Schemas are built explicitly, so `null`, the absent value and the literal
/// `false` can never be confused with one another. Plain JSON converts
/// deeply with `From<Value>`: objects become [`SchemaNode::Mapping`], arrays
/// [`SchemaNode::Sequence`], `null` [`SchemaNode::Null`] and scalars
/// [`SchemaNode::Literal`].
///
/// # Example
///
/// ```rust
/// use vouch::{SchemaNode, Valid};
/// use serde_json::json;
///
/// let address = SchemaNode::mapping([
///     ("city", SchemaNode::from(Valid::not_blank())),
///     ("state", SchemaNode::pattern("^[A-Z][A-Z]$").unwrap()),
///     ("country", SchemaNode::from("US")),
/// ]);
///
/// let chain = Valid::json(address);
/// assert!(chain.check(&json!({"city": "Santa Cruz", "state": "CA", "country": "US"})));
/// assert!(!chain.check(&json!({"city": "", "state": "ca", "country": "US"})));
/// ```
#[derive(Debug, Clone)]
pub enum SchemaNode {
    /// A string, number or boolean the value must strictly equal.
    ///
    /// Holding anything else makes the node malformed; the matcher reports it
    /// as a schema error at its path.
    Literal(Value),
    /// The value must be absent.
    Absent,
    /// The value must be null.
    Null,
    /// The value must be a string matching the regex.
    Pattern(Regex),
    /// A function deciding the message itself.
    Predicate(Predicate),
    /// A validator chain run against the value.
    Chain(Chain),
    /// An array whose items match positionally.
    Sequence(Vec<SchemaNode>),
    /// An object whose named keys match.
    Mapping(IndexMap<String, SchemaNode>),
}

impl SchemaNode {
    /// Creates a literal node without converting nested JSON.
    pub fn literal(value: impl Into<Value>) -> Self {
        SchemaNode::Literal(value.into())
    }

    /// Creates a pattern node.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(SchemaNode::Pattern(Regex::new(pattern)?))
    }

    /// Creates a predicate node.
    pub fn predicate<F>(func: F) -> Self
    where
        F: Fn(Option<&Value>) -> Option<String> + Send + Sync + 'static,
    {
        SchemaNode::Predicate(Predicate(Arc::new(func)))
    }

    /// Creates a positional sequence node.
    pub fn sequence(items: impl IntoIterator<Item = impl Into<SchemaNode>>) -> Self {
        SchemaNode::Sequence(items.into_iter().map(Into::into).collect())
    }

    /// Creates a mapping node; keys keep their insertion order.
    pub fn mapping<K, N>(entries: impl IntoIterator<Item = (K, N)>) -> Self
    where
        K: Into<String>,
        N: Into<SchemaNode>,
    {
        SchemaNode::Mapping(
            entries
                .into_iter()
                .map(|(key, node)| (key.into(), node.into()))
                .collect(),
        )
    }
}

impl From<Value> for SchemaNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => SchemaNode::Null,
            Value::Array(items) => SchemaNode::Sequence(items.into_iter().map(Into::into).collect()),
            Value::Object(fields) => SchemaNode::Mapping(
                fields
                    .into_iter()
                    .map(|(key, node)| (key, node.into()))
                    .collect(),
            ),
            scalar => SchemaNode::Literal(scalar),
        }
    }
}

impl From<&str> for SchemaNode {
    fn from(value: &str) -> Self {
        SchemaNode::Literal(Value::from(value))
    }
}

impl From<String> for SchemaNode {
    fn from(value: String) -> Self {
        SchemaNode::Literal(Value::from(value))
    }
}

impl From<bool> for SchemaNode {
    fn from(value: bool) -> Self {
        SchemaNode::Literal(Value::from(value))
    }
}

impl From<i64> for SchemaNode {
    fn from(value: i64) -> Self {
        SchemaNode::Literal(Value::from(value))
    }
}

impl From<f64> for SchemaNode {
    fn from(value: f64) -> Self {
        SchemaNode::Literal(Value::from(value))
    }
}

impl From<Regex> for SchemaNode {
    fn from(regex: Regex) -> Self {
        SchemaNode::Pattern(regex)
    }
}

impl From<Chain> for SchemaNode {
    fn from(chain: Chain) -> Self {
        SchemaNode::Chain(chain)
    }
}

impl From<&NamedTest> for SchemaNode {
    fn from(named: &NamedTest) -> Self {
        SchemaNode::Chain(Chain::from(named))
    }
}

impl From<Vec<SchemaNode>> for SchemaNode {
    fn from(items: Vec<SchemaNode>) -> Self {
        SchemaNode::Sequence(items)
    }
}

impl From<IndexMap<String, SchemaNode>> for SchemaNode {
    fn from(fields: IndexMap<String, SchemaNode>) -> Self {
        SchemaNode::Mapping(fields)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaNode>();
    assert_sync::<SchemaNode>();
};
