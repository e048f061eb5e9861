//! The `Valid` entry point.

use regex::Regex;
use serde_json::Value;

use crate::chain::{Chain, Kind, NamedTest, Test};
use crate::schema::SchemaNode;
use crate::validation::MatchOptions;

/// Entry point for building validator chains.
///
/// Every associated function starts a fresh [`Chain`] holding one test;
/// methods called on the result append to that same chain. Building never
/// touches shared state, so two expressions never see each other's tests.
///
/// # Example
///
/// ```rust
/// use vouch::Valid;
/// use serde_json::json;
///
/// // Fresh chains are independent
/// let a = Valid::number();
/// let b = Valid::string();
/// assert!(a.check(&json!(1)));
/// assert!(b.check(&json!("1")));
///
/// // Methods append to the chain they are called on
/// let percent = Valid::integer().ge(0).le(100);
/// assert!(percent.check(&json!(42)));
/// assert!(!percent.check(&json!(101)));
/// ```
pub struct Valid;

impl Valid {
    /// Returns an empty, unbuilt chain.
    pub fn chain() -> Chain {
        Chain::new()
    }

    /// Starts a chain with a custom test.
    pub fn add_test(test: Test) -> Chain {
        Chain::new().add_test(test)
    }

    /// Starts a chain with the tests of a sealed chain.
    pub fn then(named: &NamedTest) -> Chain {
        Chain::new().then(named)
    }

    /// Starts a chain whose first test always passes.
    pub fn nop() -> Chain {
        Chain::new().nop()
    }

    /// Starts a chain that always fails with `message`.
    pub fn fail(message: impl Into<String>) -> Chain {
        Chain::new().fail(message)
    }

    /// Starts a chain marking validation that has not been written yet.
    pub fn todo(name: &str) -> Chain {
        Chain::new().todo(name)
    }

    /// Starts a chain requiring strict equality with `expected`.
    pub fn equal(expected: impl Into<Value>) -> Chain {
        Chain::new().equal(expected)
    }

    /// Starts a chain requiring strict equality with one of `options`.
    pub fn equal_any(options: impl IntoIterator<Item = impl Into<Value>>) -> Chain {
        Chain::new().equal_any(options)
    }

    /// Starts a chain rejecting values equal to `unwanted`.
    pub fn not_equal(unwanted: impl Into<Value>) -> Chain {
        Chain::new().not_equal(unwanted)
    }

    /// Starts a chain requiring a value of the given kind.
    pub fn kind(kind: Kind) -> Chain {
        Chain::new().kind(kind)
    }

    /// Starts a chain requiring a string matching `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    pub fn matches(pattern: &str) -> Result<Chain, regex::Error> {
        Chain::new().matches(pattern)
    }

    /// Starts a chain requiring a string matching a compiled regex.
    pub fn matches_regex(regex: Regex) -> Chain {
        Chain::new().matches_regex(regex)
    }

    /// Starts a chain requiring a string that does not match `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    pub fn no_match(pattern: &str) -> Result<Chain, regex::Error> {
        Chain::new().no_match(pattern)
    }

    /// Starts a chain requiring a string or array length within bounds.
    pub fn length(min: usize, max: Option<usize>) -> Chain {
        Chain::new().length(min, max)
    }

    /// Starts a chain requiring `value % by == remainder`.
    pub fn modulo(by: f64, remainder: f64) -> Chain {
        Chain::new().modulo(by, remainder)
    }

    /// Starts a chain requiring a value less than `bound`.
    pub fn lt(bound: impl Into<Value>) -> Chain {
        Chain::new().lt(bound)
    }

    /// Starts a chain requiring a value less than or equal to `bound`.
    pub fn le(bound: impl Into<Value>) -> Chain {
        Chain::new().le(bound)
    }

    /// Starts a chain requiring a value greater than `bound`.
    pub fn gt(bound: impl Into<Value>) -> Chain {
        Chain::new().gt(bound)
    }

    /// Starts a chain requiring a value greater than or equal to `bound`.
    pub fn ge(bound: impl Into<Value>) -> Chain {
        Chain::new().ge(bound)
    }

    /// Starts a chain requiring membership in `collection`.
    pub fn one_of(collection: impl IntoIterator<Item = impl Into<Value>>) -> Chain {
        Chain::new().one_of(collection)
    }

    /// Starts a chain requiring every chain in `chains` to pass.
    pub fn and(chains: &[Chain]) -> Chain {
        Chain::new().and(chains)
    }

    /// Starts a chain requiring at least one chain in `chains` to pass.
    pub fn or(chains: &[Chain]) -> Chain {
        Chain::new().or(chains)
    }

    /// Starts a chain requiring `chain` to fail.
    pub fn not(chain: &Chain) -> Chain {
        Chain::new().not(chain)
    }

    /// Starts a chain requiring `chain` to fail, with a custom message.
    pub fn not_with(chain: &Chain, message: impl Into<String>) -> Chain {
        Chain::new().not_with(chain, message)
    }

    /// Starts a chain that accepts absent and null values early.
    pub fn optional() -> Chain {
        Chain::new().optional()
    }

    /// Starts a chain accepting missing values or values passing `chain`.
    pub fn optional_of(chain: &Chain) -> Chain {
        Chain::new().optional_of(chain)
    }

    /// Starts a chain running `chain` with its failure replaced by `message`.
    pub fn message_for(chain: &Chain, message: impl Into<String>) -> Chain {
        Chain::new().message_for(chain, message)
    }

    /// Starts a chain requiring an array.
    pub fn array() -> Chain {
        Chain::new().array()
    }

    /// Starts a chain requiring an array whose items pass `items`.
    pub fn array_of(items: &Chain) -> Chain {
        Chain::new().array_of(items)
    }

    /// Starts a chain matching values against a schema tree.
    pub fn json(schema: impl Into<SchemaNode>) -> Chain {
        Chain::new().json(schema)
    }

    /// Starts a chain matching values against a schema tree with `options`.
    pub fn json_with(schema: impl Into<SchemaNode>, options: MatchOptions) -> Chain {
        Chain::new().json_with(schema, options)
    }

    /// Starts a chain requiring the absent value.
    pub fn undef() -> Chain {
        Chain::new().undef()
    }

    /// Starts a chain rejecting the absent value.
    pub fn defined() -> Chain {
        Chain::new().defined()
    }

    /// Starts a chain requiring null.
    pub fn nil() -> Chain {
        Chain::new().nil()
    }

    /// Starts a chain rejecting null.
    pub fn not_null() -> Chain {
        Chain::new().not_null()
    }

    /// Starts a chain rejecting absent and null values.
    pub fn exists() -> Chain {
        Chain::new().exists()
    }

    /// Starts a chain requiring an empty string or array.
    pub fn empty() -> Chain {
        Chain::new().empty()
    }

    /// Starts a chain requiring a boolean.
    pub fn boolean() -> Chain {
        Chain::new().boolean()
    }

    /// Starts a chain requiring `true`.
    pub fn is_true() -> Chain {
        Chain::new().is_true()
    }

    /// Starts a chain requiring `false`.
    pub fn is_false() -> Chain {
        Chain::new().is_false()
    }

    /// Starts a chain requiring a number.
    pub fn number() -> Chain {
        Chain::new().number()
    }

    /// Starts a chain requiring a number with no fractional part.
    pub fn integer() -> Chain {
        Chain::new().integer()
    }

    /// Starts a chain requiring an even number.
    pub fn even() -> Chain {
        Chain::new().even()
    }

    /// Starts a chain requiring an odd number.
    pub fn odd() -> Chain {
        Chain::new().odd()
    }

    /// Starts a chain requiring a string.
    pub fn string() -> Chain {
        Chain::new().string()
    }

    /// Starts a chain requiring a whitespace-only string.
    pub fn blank() -> Chain {
        Chain::new().blank()
    }

    /// Starts a chain rejecting blank values.
    pub fn not_blank() -> Chain {
        Chain::new().not_blank()
    }

    /// Starts a chain requiring an object.
    pub fn object() -> Chain {
        Chain::new().object()
    }
}
