//! Named composite tests built from primitives and combinators.

use serde_json::Value;

use super::{Chain, Kind, Outcome, Test};

impl Chain {
    /// Requires the value to be absent.
    pub fn undef(self) -> Self {
        self.add_test(Test::new("undef", |value| {
            Outcome::pass_if(value.is_none(), || "must be undefined".to_string())
        }))
    }

    /// Rejects the absent value.
    pub fn defined(self) -> Self {
        self.not_with(&Chain::new().undef(), "can't be undefined")
    }

    /// Requires the value to be null.
    pub fn nil(self) -> Self {
        self.add_test(Test::new("nil", |value| {
            Outcome::pass_if(matches!(value, Some(Value::Null)), || {
                "must be null".to_string()
            })
        }))
    }

    /// Rejects null.
    pub fn not_null(self) -> Self {
        self.not_with(&Chain::new().nil(), "can't be null")
    }

    /// Rejects absent and null values; `0`, `false` and `""` exist.
    pub fn exists(self) -> Self {
        self.not_with(&Chain::new().or(&[Chain::new().undef(), Chain::new().nil()]), "must exist")
    }

    /// Requires an empty string or array; absent and null count as empty.
    pub fn empty(self) -> Self {
        self.message_for(&Chain::new().optional().length(0, Some(0)), "must be empty")
    }

    /// Requires a boolean.
    pub fn boolean(self) -> Self {
        self.message_for(&Chain::new().kind(Kind::Boolean), "must be a boolean")
    }

    /// Requires the value `true`.
    pub fn is_true(self) -> Self {
        self.message_for(&Chain::new().equal(true), "must be true")
    }

    /// Requires the value `false`.
    pub fn is_false(self) -> Self {
        self.message_for(&Chain::new().equal(false), "must be false")
    }

    /// Requires a number.
    pub fn number(self) -> Self {
        self.message_for(&Chain::new().kind(Kind::Number), "must be a number")
    }

    /// Requires a number with no fractional part.
    pub fn integer(self) -> Self {
        self.message_for(
            &Chain::new().number().modulo(1.0, 0.0),
            "must be an integer",
        )
    }

    /// Requires an even number.
    pub fn even(self) -> Self {
        self.message_for(&Chain::new().number().modulo(2.0, 0.0), "must be even")
    }

    /// Requires an odd number.
    pub fn odd(self) -> Self {
        self.message_for(&Chain::new().number().modulo(2.0, 1.0), "must be odd")
    }

    /// Requires a string.
    pub fn string(self) -> Self {
        self.message_for(&Chain::new().kind(Kind::String), "must be a string")
    }

    /// Requires whitespace only; absent and null count as blank.
    pub fn blank(self) -> Self {
        self.add_test(Test::new("blank", |value| {
            let blank = match value {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.trim().is_empty(),
                Some(_) => false,
            };
            Outcome::pass_if(blank, || "must be blank".to_string())
        }))
    }

    /// Rejects blank values, including absent and null.
    pub fn not_blank(self) -> Self {
        self.not_with(&Chain::new().blank(), "can't be blank")
    }

    /// Requires an object.
    pub fn object(self) -> Self {
        self.message_for(&Chain::new().kind(Kind::Object), "must be an object")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Failure;
    use serde_json::json;

    fn message(chain: Chain, value: Option<&Value>) -> Option<String> {
        chain.evaluate(value).into_result().err().map(|f: Failure| f.to_string())
    }

    #[test]
    fn test_undefined_and_null() {
        assert!(Chain::new().undef().check(None));
        assert_eq!(
            message(Chain::new().undef(), Some(&json!(null))),
            Some("must be undefined".to_string())
        );
        assert!(Chain::new().defined().check(&json!(null)));
        assert!(Chain::new().nil().check(&json!(null)));
        assert_eq!(
            message(Chain::new().nil(), None),
            Some("must be null".to_string())
        );
        assert!(Chain::new().not_null().check(None));
        assert_eq!(
            message(Chain::new().not_null(), Some(&json!(null))),
            Some("can't be null".to_string())
        );
    }

    #[test]
    fn test_exists() {
        assert!(Chain::new().exists().check(&json!(0)));
        assert!(Chain::new().exists().check(&json!(false)));
        assert_eq!(
            message(Chain::new().exists(), Some(&json!(null))),
            Some("must exist".to_string())
        );
        assert!(!Chain::new().exists().check(None));
    }

    #[test]
    fn test_empty() {
        assert!(Chain::new().empty().check(&json!("")));
        assert!(Chain::new().empty().check(None));
        assert!(Chain::new().array().empty().check(&json!([])));
        assert_eq!(
            message(Chain::new().empty(), Some(&json!(" "))),
            Some("must be empty".to_string())
        );
        assert_eq!(
            message(Chain::new().array().empty(), Some(&json!([null]))),
            Some("must be empty".to_string())
        );
    }

    #[test]
    fn test_booleans() {
        assert!(Chain::new().boolean().check(&json!(false)));
        assert_eq!(
            message(Chain::new().boolean(), None),
            Some("must be a boolean".to_string())
        );
        assert!(Chain::new().is_true().check(&json!(true)));
        assert_eq!(
            message(Chain::new().is_false(), Some(&json!(true))),
            Some("must be false".to_string())
        );
    }

    #[test]
    fn test_numbers() {
        assert!(Chain::new().number().check(&json!(123)));
        assert!(Chain::new().integer().check(&json!(123.0)));
        assert_eq!(
            message(Chain::new().integer(), Some(&json!(123.1))),
            Some("must be an integer".to_string())
        );
        assert_eq!(
            message(Chain::new().integer(), Some(&json!("123.0"))),
            Some("must be an integer".to_string())
        );
        assert!(Chain::new().even().check(&json!(0)));
        assert_eq!(
            message(Chain::new().even(), Some(&json!(17))),
            Some("must be even".to_string())
        );
        assert!(Chain::new().odd().check(&json!(17)));
        assert_eq!(
            message(Chain::new().odd(), Some(&json!(0))),
            Some("must be odd".to_string())
        );
    }

    #[test]
    fn test_blank() {
        assert!(Chain::new().blank().check(&json!(" \n\t  ")));
        assert!(Chain::new().blank().check(&json!("")));
        assert!(Chain::new().blank().check(None));
        assert_eq!(
            message(Chain::new().blank(), Some(&json!("    ."))),
            Some("must be blank".to_string())
        );
        assert!(Chain::new().not_blank().check(&json!("   bla")));
        assert_eq!(
            message(Chain::new().not_blank(), Some(&json!("\n"))),
            Some("can't be blank".to_string())
        );
        assert!(!Chain::new().not_blank().check(None));
    }

    #[test]
    fn test_string_and_object() {
        assert!(Chain::new().string().check(&json!(" 123")));
        assert_eq!(
            message(Chain::new().string(), None),
            Some("must be a string".to_string())
        );
        assert!(Chain::new().object().check(&json!({})));
        assert!(!Chain::new().object().check(&json!([])));
    }
}
