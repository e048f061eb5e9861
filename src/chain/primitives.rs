//! Primitive tests.
//!
//! Each method here appends exactly one test that captures its parameters at
//! construction time.

use std::cmp::Ordering;
use std::fmt::{self, Display};

use regex::Regex;
use serde_json::Value;

use super::{Chain, Outcome, Test};
use crate::render::escape;

/// The kinds of value a chain can require with [`Chain::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// The absent value.
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl Kind {
    /// Returns the kind of a possibly absent value.
    pub fn of(value: Option<&Value>) -> Kind {
        match value {
            None => Kind::Undefined,
            Some(Value::Null) => Kind::Null,
            Some(Value::Bool(_)) => Kind::Boolean,
            Some(Value::Number(_)) => Kind::Number,
            Some(Value::String(_)) => Kind::String,
            Some(Value::Array(_)) => Kind::Array,
            Some(Value::Object(_)) => Kind::Object,
        }
    }

    /// Returns the lowercase name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Object => "object",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Strict equality: no coercion across kinds, numbers compared by value.
pub(crate) fn strict_equal(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(Value::Number(a)), Some(Value::Number(b))) => a.as_f64() == b.as_f64(),
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Absent and null both count as missing.
pub(crate) fn is_missing(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

/// Orders two values of the same comparable kind (numbers or strings).
fn compare(value: &Value, bound: &Value) -> Option<Ordering> {
    match (value, bound) {
        (Value::Number(a), Value::Number(b)) => a.as_f64()?.partial_cmp(&b.as_f64()?),
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        _ => None,
    }
}

/// Formats `n` with a unit, pluralized when needed.
fn counted(n: usize, unit: &str) -> String {
    if n == 1 {
        format!("{} {}", n, unit)
    } else {
        format!("{} {}s", n, unit)
    }
}

impl Chain {
    /// Always passes.
    pub fn nop(self) -> Self {
        self.add_test(Test::new("nop", |_| Outcome::Pass))
    }

    /// Always fails with `message`.
    pub fn fail(self, message: impl Into<String>) -> Self {
        let message = message.into();
        self.add_test(Test::new("fail", move |_| Outcome::fail(message.clone())))
    }

    /// Always fails, marking validation that has not been written yet.
    pub fn todo(self, name: &str) -> Self {
        self.fail(format!("{} is still todo", name))
    }

    /// Requires the value to strictly equal `expected`.
    ///
    /// Numbers compare by value (`123` equals `123.0`); nothing is coerced
    /// across kinds (`"1"` never equals `1`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use vouch::Valid;
    /// use serde_json::json;
    ///
    /// assert!(Valid::equal(12).check(&json!(12.0)));
    /// assert!(!Valid::equal(12).check(&json!("12")));
    /// ```
    pub fn equal(self, expected: impl Into<Value>) -> Self {
        let expected = expected.into();
        self.add_test(Test::new("equal", move |value| {
            Outcome::pass_if(strict_equal(value, Some(&expected)), || {
                format!("must equal {}", escape(Some(&expected)))
            })
        }))
    }

    /// Requires the value to strictly equal one of `options`.
    pub fn equal_any(self, options: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        let options: Vec<Value> = options.into_iter().map(Into::into).collect();
        self.add_test(Test::new("equal_any", move |value| {
            if options.iter().any(|option| strict_equal(value, Some(option))) {
                return Outcome::Pass;
            }
            let mut rendered: Vec<String> = options.iter().map(|o| escape(Some(o))).collect();
            match rendered.len() {
                0 => Outcome::fail("equal needs at least one option"),
                1 => Outcome::fail(format!("must equal {}", rendered[0])),
                _ => {
                    let last = rendered.pop().unwrap_or_default();
                    Outcome::fail(format!("must be {} or {}", rendered.join(", "), last))
                }
            }
        }))
    }

    /// Rejects values strictly equal to `unwanted`.
    pub fn not_equal(self, unwanted: impl Into<Value>) -> Self {
        let unwanted = unwanted.into();
        let message = format!("can't equal {}", escape(Some(&unwanted)));
        self.not_with(&Chain::new().equal(unwanted), message)
    }

    /// Requires the value to be of the given kind.
    pub fn kind(self, kind: Kind) -> Self {
        self.add_test(Test::new("kind", move |value| {
            let actual = Kind::of(value);
            Outcome::pass_if(actual == kind, || {
                format!("must be of type {} not {}", kind, actual)
            })
        }))
    }

    /// Requires the value to be a string matching `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vouch::Valid;
    /// use serde_json::json;
    ///
    /// let chain = Valid::matches(r"^abc$").unwrap();
    /// assert!(chain.check(&json!("abc")));
    /// assert!(!chain.check(&json!("abcd")));
    /// assert!(!chain.check(&json!(1)));
    /// ```
    pub fn matches(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.matches_regex(Regex::new(pattern)?))
    }

    /// Requires the value to be a string matching an already compiled regex.
    pub fn matches_regex(self, regex: Regex) -> Self {
        self.add_test(Test::new("matches", move |value| match value {
            Some(Value::String(s)) => {
                Outcome::pass_if(regex.is_match(s), || format!("must match /{}/", regex))
            }
            _ => Outcome::fail("must be a string"),
        }))
    }

    /// Rejects strings matching `pattern`.
    ///
    /// # Errors
    ///
    /// Returns the regex error if `pattern` does not compile.
    pub fn no_match(self, pattern: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(pattern)?;
        let message = format!("can't match /{}/", regex);
        Ok(self.not_with(&Chain::new().matches_regex(regex), message))
    }

    /// Requires a string (counted in characters) or array (counted in items)
    /// whose length is at least `min` and, when given, at most `max`.
    pub fn length(self, min: usize, max: Option<usize>) -> Self {
        self.add_test(Test::new("length", move |value| {
            let (len, unit) = match value {
                Some(Value::String(s)) => (s.chars().count(), "character"),
                Some(Value::Array(items)) => (items.len(), "element"),
                _ => return Outcome::fail("must have a length"),
            };
            if len < min {
                return Outcome::fail(format!(
                    "is too short (minimum is {})",
                    counted(min, unit)
                ));
            }
            match max {
                Some(max) if len > max => Outcome::fail(format!(
                    "is too long (maximum is {})",
                    counted(max, unit)
                )),
                _ => Outcome::Pass,
            }
        }))
    }

    /// Requires a number whose remainder when divided by `by` is `remainder`.
    pub fn modulo(self, by: f64, remainder: f64) -> Self {
        self.add_test(Test::new("modulo", move |value| {
            match value.and_then(Value::as_f64) {
                Some(n) => {
                    let actual = n % by;
                    Outcome::pass_if(actual == remainder, || {
                        format!("mod {} is {} not {}", by, actual, remainder)
                    })
                }
                None => Outcome::fail("must be a number"),
            }
        }))
    }

    /// Requires the value to be less than `bound`.
    pub fn lt(self, bound: impl Into<Value>) -> Self {
        self.relation("lt", bound.into(), "less than", |o| o == Ordering::Less)
    }

    /// Requires the value to be less than or equal to `bound`.
    pub fn le(self, bound: impl Into<Value>) -> Self {
        self.relation("le", bound.into(), "less than or equal to", |o| {
            o != Ordering::Greater
        })
    }

    /// Requires the value to be greater than `bound`.
    pub fn gt(self, bound: impl Into<Value>) -> Self {
        self.relation("gt", bound.into(), "greater than", |o| o == Ordering::Greater)
    }

    /// Requires the value to be greater than or equal to `bound`.
    pub fn ge(self, bound: impl Into<Value>) -> Self {
        self.relation("ge", bound.into(), "greater than or equal to", |o| {
            o != Ordering::Less
        })
    }

    fn relation(
        self,
        name: &'static str,
        bound: Value,
        phrase: &'static str,
        accept: fn(Ordering) -> bool,
    ) -> Self {
        self.add_test(Test::new(name, move |value| {
            match value.and_then(|v| compare(v, &bound)) {
                Some(ordering) => Outcome::pass_if(accept(ordering), || {
                    format!("must be {} {}", phrase, escape(Some(&bound)))
                }),
                None => Outcome::fail(format!(
                    "can't be compared with {}",
                    escape(Some(&bound))
                )),
            }
        }))
    }

    /// Requires the value to strictly equal a member of `collection`.
    pub fn one_of(self, collection: impl IntoIterator<Item = impl Into<Value>>) -> Self {
        let collection: Vec<Value> = collection.into_iter().map(Into::into).collect();
        self.add_test(Test::new("one_of", move |value| {
            Outcome::pass_if(
                collection.iter().any(|member| strict_equal(value, Some(member))),
                || "is not one of the options".to_string(),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Failure;
    use serde_json::json;

    fn message(chain: &Chain, value: Option<&Value>) -> Option<String> {
        chain.evaluate(value).into_result().err().map(|f| f.to_string())
    }

    #[test]
    fn test_strict_equal() {
        assert!(strict_equal(Some(&json!(123)), Some(&json!(123.0))));
        assert!(!strict_equal(Some(&json!(123)), Some(&json!(123.1))));
        assert!(!strict_equal(Some(&json!("1")), Some(&json!(1))));
        assert!(!strict_equal(None, Some(&json!(null))));
        assert!(strict_equal(None, None));
    }

    #[test]
    fn test_is_missing() {
        assert!(is_missing(None));
        assert!(is_missing(Some(&json!(null))));
        assert!(!is_missing(Some(&json!(false))));
        assert!(!is_missing(Some(&json!(0))));
        assert!(!is_missing(Some(&json!(""))));
    }

    #[test]
    fn test_kind_of() {
        assert_eq!(Kind::of(None), Kind::Undefined);
        assert_eq!(Kind::of(Some(&json!([]))), Kind::Array);
        assert_eq!(Kind::of(Some(&json!({}))), Kind::Object);
        assert_eq!(Kind::Boolean.to_string(), "boolean");
    }

    #[test]
    fn test_nop_and_fail() {
        assert!(Chain::new().nop().check(&json!("any value")));
        assert_eq!(
            message(&Chain::new().fail("die!"), Some(&json!(1))),
            Some("die!".to_string())
        );
        assert_eq!(
            message(&Chain::new().todo("release 1.0"), Some(&json!(12))),
            Some("release 1.0 is still todo".to_string())
        );
    }

    #[test]
    fn test_equal_messages() {
        assert_eq!(
            message(&Chain::new().equal("a"), Some(&json!(" "))),
            Some("must equal 'a'".to_string())
        );
        assert_eq!(
            message(&Chain::new().equal(json!(null)), None),
            Some("must equal null".to_string())
        );
    }

    #[test]
    fn test_equal_any() {
        let chain = Chain::new().equal_any([1, 2, 3, 4, 5]);
        assert!(chain.check(&json!(4)));
        assert_eq!(
            message(&chain, Some(&json!(6))),
            Some("must be 1, 2, 3, 4 or 5".to_string())
        );

        let names = Chain::new().equal_any(["able", "baker"]);
        assert_eq!(
            message(&names, None),
            Some("must be 'able' or 'baker'".to_string())
        );

        let nothing = Chain::new().equal_any(Vec::<Value>::new());
        assert_eq!(
            message(&nothing, None),
            Some("equal needs at least one option".to_string())
        );
    }

    #[test]
    fn test_not_equal() {
        assert!(Chain::new().not_equal(12).check(&json!(13)));
        assert_eq!(
            message(&Chain::new().not_equal(12), Some(&json!(12))),
            Some("can't equal 12".to_string())
        );
        assert!(Chain::new().not_equal(json!(null)).check(None));
    }

    #[test]
    fn test_kind() {
        assert!(Chain::new().kind(Kind::Undefined).check(None));
        assert!(Chain::new().kind(Kind::Number).check(&json!(123)));
        assert_eq!(
            message(&Chain::new().kind(Kind::Number), Some(&json!("123"))),
            Some("must be of type number not string".to_string())
        );
    }

    #[test]
    fn test_matches() {
        let chain = Chain::new().matches("^abc$").unwrap();
        assert!(chain.check(&json!("abc")));
        assert_eq!(
            message(&chain, Some(&json!("abcd"))),
            Some("must match /^abc$/".to_string())
        );
        assert_eq!(
            message(&chain, None),
            Some("must be a string".to_string())
        );
        assert!(Chain::new().matches("(?i)ABC").unwrap().check(&json!("noodabc ")));
        assert!(Chain::new().matches("[invalid").is_err());
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn test_no_match() {
        let chain = Chain::new().no_match("(?i)wut").unwrap();
        assert!(chain.check(&json!("--")));
        assert_eq!(
            message(&chain, Some(&json!("WUT"))),
            Some("can't match /(?i)wut/".to_string())
        );
    }

    #[test]
    fn test_length() {
        assert!(Chain::new().length(6, None).check(&json!("abcdef")));
        assert!(Chain::new().length(2, Some(4)).check(&json!("()()")));
        assert!(Chain::new().length(0, Some(0)).check(&json!([])));
        assert!(Chain::new().length(3, Some(3)).check(&json!("日本語")));
        assert_eq!(
            message(&Chain::new().length(1, None), Some(&json!(""))),
            Some("is too short (minimum is 1 character)".to_string())
        );
        assert_eq!(
            message(&Chain::new().length(1, Some(4)), Some(&json!(" . . . . "))),
            Some("is too long (maximum is 4 characters)".to_string())
        );
        assert_eq!(
            message(&Chain::new().length(0, Some(0)), Some(&json!([null]))),
            Some("is too long (maximum is 0 elements)".to_string())
        );
        assert_eq!(
            message(&Chain::new().length(2, Some(4)), Some(&json!(3))),
            Some("must have a length".to_string())
        );
    }

    #[test]
    fn test_modulo() {
        assert!(Chain::new().modulo(2.0, 0.0).check(&json!(12)));
        assert!(Chain::new().modulo(2.0, 1.0).check(&json!(17)));
        assert_eq!(
            message(&Chain::new().modulo(2.0, 0.0), Some(&json!(17))),
            Some("mod 2 is 1 not 0".to_string())
        );
        assert_eq!(
            message(&Chain::new().modulo(2.0, 0.0), Some(&json!("17"))),
            Some("must be a number".to_string())
        );
    }

    #[test]
    fn test_numeric_relations() {
        assert!(Chain::new().lt(4).check(&json!(2)));
        assert!(Chain::new().le(4).check(&json!(4)));
        assert!(Chain::new().ge(4).check(&json!(4)));
        assert!(Chain::new().gt(4).check(&json!(6)));
        assert_eq!(
            message(&Chain::new().gt(4), Some(&json!(4))),
            Some("must be greater than 4".to_string())
        );
        assert_eq!(
            message(&Chain::new().le(4), Some(&json!(6))),
            Some("must be less than or equal to 4".to_string())
        );
    }

    #[test]
    fn test_string_relations() {
        assert!(Chain::new().lt("yyz").check(&json!("xyza")));
        assert!(Chain::new().ge("yyz").check(&json!("yyza")));
        assert_eq!(
            message(&Chain::new().lt("yyz"), Some(&json!("yyz"))),
            Some("must be less than 'yyz'".to_string())
        );
    }

    #[test]
    fn test_relation_across_kinds_fails() {
        assert_eq!(
            message(&Chain::new().lt(4), Some(&json!("3"))),
            Some("can't be compared with 4".to_string())
        );
        assert!(!Chain::new().ge(0).check(None));
    }

    #[test]
    fn test_one_of() {
        let chain = Chain::new().one_of(["a", "b", "c"]);
        assert!(chain.check(&json!("c")));
        assert_eq!(
            chain.evaluate(&json!(2)).into_result(),
            Err(Failure::message("is not one of the options"))
        );
    }
}
