//! Validator chains.
//!
//! A [`Chain`] is an ordered, append-only list of [`Test`]s. Builder methods
//! consume the chain and return it with one more test appended, so a fluent
//! expression like `Valid::number().ge(0).lt(10)` builds exactly one chain.
//! Evaluation is fail-fast: the first rejecting test decides the result.
//!
//! # Example
//!
//! ```rust
//! use vouch::Valid;
//! use serde_json::json;
//!
//! let small_even = Valid::even().lt(10);
//!
//! assert!(small_even.check(&json!(4)));
//! assert!(!small_even.check(&json!(12)));
//!
//! let result = small_even.evaluate(&json!(3));
//! assert!(result.is_failure());
//! ```

mod combinators;
mod composites;
mod primitives;

pub use primitives::Kind;
pub use test::{NamedTest, Outcome, Test};

pub(crate) use primitives::{is_missing, strict_equal};
pub(crate) use test::run_tests;

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use stillwater::Validation;

use crate::error::VerifyError;
use crate::render::escape;
use crate::ValidationResult;

/// An ordered sequence of tests a value is run through.
///
/// Chains are cheap to clone (tests are shared) and are `Send + Sync`, so a
/// chain built once at startup can validate values from any number of
/// threads. Evaluation keeps no state on the chain.
///
/// A chain with no tests is "unbuilt": evaluating it reports
/// [`Failure::NoTests`](crate::Failure::NoTests) rather than success, so a forgotten assertion never
/// looks like a passing value.
#[derive(Clone, Default)]
pub struct Chain {
    tests: Vec<Test>,
}

impl Chain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a test and returns the chain.
    pub fn add_test(mut self, test: Test) -> Self {
        self.tests.push(test);
        self
    }

    /// Returns the number of tests in the chain.
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Returns true if no test has been added yet.
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Returns the tests in evaluation order.
    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    /// Runs every test in order against `value`.
    ///
    /// Pass `&value` for a present value or `None` for an absent one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vouch::{Failure, Valid};
    /// use serde_json::json;
    /// use stillwater::Validation;
    ///
    /// let chain = Valid::optional().integer();
    ///
    /// assert!(chain.evaluate(None).is_success());
    /// assert!(chain.evaluate(&json!(12)).is_success());
    ///
    /// match chain.evaluate(&json!("12")) {
    ///     Validation::Failure(failure) => assert_eq!(failure, Failure::message("must be an integer")),
    ///     Validation::Success(()) => unreachable!(),
    /// }
    /// ```
    pub fn evaluate<'a>(&self, value: impl Into<Option<&'a Value>>) -> ValidationResult<()> {
        match run_tests(&self.tests, value.into()) {
            Outcome::Pass | Outcome::Done => {
                tracing::trace!(tests = self.tests.len(), "chain passed");
                Validation::Success(())
            }
            Outcome::Fail(failure) => {
                tracing::trace!(tests = self.tests.len(), %failure, "chain rejected value");
                Validation::Failure(failure)
            }
        }
    }

    /// Returns true if the value passes every test.
    pub fn check<'a>(&self, value: impl Into<Option<&'a Value>>) -> bool {
        self.evaluate(value).is_success()
    }

    /// Evaluates the value and turns a failure into an error.
    ///
    /// # Errors
    ///
    /// Returns a [`VerifyError`] carrying the rendered value and the failure.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vouch::Valid;
    /// use serde_json::json;
    ///
    /// let chain = Valid::equal(12);
    /// assert!(chain.verify(&json!(12)).is_ok());
    ///
    /// let err = chain.verify(&json!(13)).unwrap_err();
    /// assert_eq!(err.to_string(), "13 must equal 12");
    /// ```
    pub fn verify<'a>(&self, value: impl Into<Option<&'a Value>>) -> Result<(), VerifyError> {
        let value = value.into();
        self.evaluate(value)
            .into_result()
            .map_err(|failure| VerifyError {
                value: escape(value),
                failure,
            })
    }

    /// Freezes the current tests into a reusable [`NamedTest`].
    ///
    /// The sealed copy is independent of this chain.
    pub fn seal(&self, name: impl Into<Arc<str>>) -> NamedTest {
        NamedTest::new(name, self.snapshot())
    }

    /// Appends every test of a sealed chain.
    pub fn then(mut self, named: &NamedTest) -> Self {
        self.tests.extend(named.tests().iter().cloned());
        self
    }

    /// Shares the current test list with a combinator.
    pub(crate) fn snapshot(&self) -> Arc<[Test]> {
        Arc::from(self.tests.as_slice())
    }
}

impl From<&NamedTest> for Chain {
    fn from(named: &NamedTest) -> Self {
        Chain::new().then(named)
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.tests.iter().map(Test::name))
            .finish()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Chain>();
    assert_sync::<Chain>();
};
