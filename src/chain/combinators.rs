//! Chain combinators for composing validation logic.
//!
//! Combinators take other chains by reference and snapshot their tests when
//! the combinator is built. They never take ownership of the argument chains.
//!
//! - `and`: every chain must pass; the first failure is reported
//! - `or`: one chain must pass; if none does, every failure is reported
//! - `not`: the chain must fail
//! - `optional`: absent or null values skip the rest of the chain
//! - `message_for` / `message`: replace a failure with a fixed message
//! - `array` / `array_of`: the value must be an array, optionally of valid items
//!
//! An unbuilt argument chain fails like any other rejecting chain, so `or`
//! tries the next alternative and `not` passes. Where that failure becomes
//! the result (`and`, `message_for`, `array_of`, or an `or` with no passing
//! alternative) it is reported as [`Failure::NoTests`] and never relabelled.
//!
//! # Example
//!
//! ```rust
//! use vouch::Valid;
//! use serde_json::json;
//!
//! let null_or_string = Valid::or(&[Valid::nil(), Valid::string()]);
//!
//! assert!(null_or_string.check(&json!(null)));
//! assert!(null_or_string.check(&json!("123")));
//!
//! let err = null_or_string.verify(&json!(123)).unwrap_err();
//! assert_eq!(err.failure.to_string(), "must be null or must be a string");
//! ```

use std::sync::Arc;

use serde_json::Value;
use stillwater::prelude::*;

use super::{is_missing, run_tests, Chain, Outcome, Test};
use crate::error::Failure;

fn snapshots(chains: &[Chain]) -> Vec<Arc<[Test]>> {
    chains.iter().map(Chain::snapshot).collect()
}

/// Builds a test that replaces any failure of `queue` with `message`.
///
/// With `keep_done`, an early success inside the queue also ends the outer
/// chain; otherwise the queue counts as one self-contained test.
fn relabel(queue: Arc<[Test]>, message: String, keep_done: bool) -> Test {
    Test::new("message_for", move |value| match run_tests(&queue, value) {
        Outcome::Done if keep_done => Outcome::Done,
        Outcome::Pass | Outcome::Done => Outcome::Pass,
        Outcome::Fail(Failure::NoTests) => Outcome::Fail(Failure::NoTests),
        Outcome::Fail(_) => Outcome::fail(message.clone()),
    })
}

impl Chain {
    /// Requires every chain in `chains` to pass, in order.
    ///
    /// The first failing chain's failure is reported unchanged. With no
    /// chains the test passes unconditionally.
    pub fn and(self, chains: &[Chain]) -> Self {
        let queues = snapshots(chains);
        self.add_test(Test::new("and", move |value| {
            for queue in &queues {
                if let Outcome::Fail(failure) = run_tests(queue, value) {
                    return Outcome::Fail(failure);
                }
            }
            Outcome::Pass
        }))
    }

    /// Requires at least one chain in `chains` to pass.
    ///
    /// Stops at the first chain that passes. If every chain fails, the
    /// failures are combined into one message joined with `or`, unless one
    /// of the chains was unbuilt, which is reported as
    /// [`Failure::NoTests`]. With no chains the test passes unconditionally.
    pub fn or(self, chains: &[Chain]) -> Self {
        let queues = snapshots(chains);
        self.add_test(Test::new("or", move |value| {
            let mut combined: Option<Failure> = None;
            let mut unbuilt = false;
            for queue in &queues {
                match run_tests(queue, value) {
                    Outcome::Pass | Outcome::Done => return Outcome::Pass,
                    Outcome::Fail(Failure::NoTests) => unbuilt = true,
                    Outcome::Fail(failure) => {
                        combined = Some(match combined {
                            Some(previous) => previous.combine(failure),
                            None => failure,
                        });
                    }
                }
            }
            if unbuilt {
                return Outcome::Fail(Failure::NoTests);
            }
            match combined {
                Some(failure) => Outcome::Fail(failure),
                None => Outcome::Pass,
            }
        }))
    }

    /// Requires `chain` to fail.
    pub fn not(self, chain: &Chain) -> Self {
        self.not_with(chain, "validation must fail")
    }

    /// Requires `chain` to fail, reporting `message` when it passes.
    ///
    /// An unbuilt `chain` never passes, so negating it always succeeds.
    pub fn not_with(self, chain: &Chain, message: impl Into<String>) -> Self {
        let queue = chain.snapshot();
        let message = message.into();
        self.add_test(Test::new("not", move |value| match run_tests(&queue, value) {
            Outcome::Pass | Outcome::Done => Outcome::fail(message.clone()),
            Outcome::Fail(_) => Outcome::Pass,
        }))
    }

    /// Lets absent and null values pass without running the tests that follow.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vouch::Valid;
    /// use serde_json::json;
    ///
    /// let chain = Valid::optional().integer();
    /// assert!(chain.check(None));
    /// assert!(chain.check(&json!(null)));
    /// assert!(chain.check(&json!(12)));
    /// assert!(!chain.check(&json!("12")));
    /// ```
    pub fn optional(self) -> Self {
        self.add_test(Test::new("optional", |value| {
            if is_missing(value) {
                Outcome::Done
            } else {
                Outcome::Pass
            }
        }))
    }

    /// Lets absent and null values pass, otherwise requires `chain` to pass.
    pub fn optional_of(self, chain: &Chain) -> Self {
        self.optional().and(std::slice::from_ref(chain))
    }

    /// Runs `chain` as one step and replaces any failure with `message`.
    ///
    /// `chain` is self-contained: an `optional()` inside it accepts a missing
    /// value for this step only, and the tests that follow still run.
    pub fn message_for(self, chain: &Chain, message: impl Into<String>) -> Self {
        self.add_test(relabel(chain.snapshot(), message.into(), false))
    }

    /// Replaces any failure of the tests appended so far with `message`.
    ///
    /// Only the message changes: a value the chain accepted early (through
    /// `optional()`) still ends evaluation with success. An empty chain is
    /// returned unchanged, so it still reports that no tests are configured.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vouch::Valid;
    /// use serde_json::json;
    ///
    /// let chain = Valid::equal(12).message("first").message("last");
    /// let err = chain.verify(&json!(13)).unwrap_err();
    /// assert_eq!(err.failure.to_string(), "last");
    ///
    /// let text = Valid::optional().string().message("must be text").integer();
    /// assert!(text.check(None));
    /// ```
    pub fn message(self, message: impl Into<String>) -> Self {
        if self.is_empty() {
            return self;
        }
        Chain::new().add_test(relabel(self.snapshot(), message.into(), true))
    }

    /// Requires the value to be an array.
    pub fn array(self) -> Self {
        self.add_test(Test::new("array", |value| {
            Outcome::pass_if(matches!(value, Some(Value::Array(_))), || {
                "must be an array".to_string()
            })
        }))
    }

    /// Requires an array whose every item passes `items`.
    ///
    /// The first failing item is reported as `item <index> <failure>`.
    pub fn array_of(self, items: &Chain) -> Self {
        let queue = items.snapshot();
        self.add_test(Test::new("array_of", move |value| {
            let Some(Value::Array(elements)) = value else {
                return Outcome::fail("must be an array");
            };
            for (i, element) in elements.iter().enumerate() {
                match run_tests(&queue, Some(element)) {
                    Outcome::Pass | Outcome::Done => continue,
                    Outcome::Fail(Failure::NoTests) => return Outcome::Fail(Failure::NoTests),
                    Outcome::Fail(failure) => {
                        return Outcome::fail(format!("item {} {}", i, failure))
                    }
                }
            }
            Outcome::Pass
        }))
    }
}
