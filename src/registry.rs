//! Registry of named tests.
//!
//! This module provides the [`TestRegistry`] type that stores sealed chains
//! under names so applications can build their own vocabulary of tests and
//! apply them by name.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::chain::{Chain, NamedTest};
use crate::ValidationResult;

/// Type alias for the named test storage map.
type TestMap = Arc<RwLock<HashMap<String, NamedTest>>>;

/// A thread-safe registry for storing and retrieving named tests.
///
/// The registry is an ordinary value the application builds and passes
/// around; nothing is registered globally. Clones share the same storage.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can look up and validate concurrently (read access)
/// - Registration operations are serialized (write access)
///
/// # Example
///
/// ```rust
/// use vouch::{TestRegistry, Valid};
/// use serde_json::json;
///
/// let registry = TestRegistry::with_builtins();
/// registry
///     .register("zip", Valid::string().matches(r"^\d{5}$").unwrap().seal("zip"))
///     .unwrap();
///
/// let chain = Valid::optional().named(&registry, "zip").unwrap();
/// assert!(chain.check(&json!("95060")));
/// assert!(chain.check(None));
/// assert!(!chain.check(&json!("9506")));
/// ```
#[derive(Clone, Default)]
pub struct TestRegistry {
    tests: TestMap,
}

impl TestRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the named composites (`integer`, `string`,
    /// `not_blank` and the rest) under their method names.
    pub fn with_builtins() -> Self {
        let builtins = [
            Chain::new().undef().seal("undef"),
            Chain::new().defined().seal("defined"),
            Chain::new().nil().seal("nil"),
            Chain::new().not_null().seal("not_null"),
            Chain::new().exists().seal("exists"),
            Chain::new().empty().seal("empty"),
            Chain::new().boolean().seal("boolean"),
            Chain::new().is_true().seal("is_true"),
            Chain::new().is_false().seal("is_false"),
            Chain::new().number().seal("number"),
            Chain::new().integer().seal("integer"),
            Chain::new().even().seal("even"),
            Chain::new().odd().seal("odd"),
            Chain::new().string().seal("string"),
            Chain::new().blank().seal("blank"),
            Chain::new().not_blank().seal("not_blank"),
            Chain::new().object().seal("object"),
            Chain::new().array().seal("array"),
        ];

        let map = builtins
            .into_iter()
            .map(|named| (named.name().to_string(), named))
            .collect();
        Self {
            tests: Arc::new(RwLock::new(map)),
        }
    }

    /// Registers a sealed chain under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already taken.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vouch::{TestRegistry, Valid};
    ///
    /// let registry = TestRegistry::new();
    /// registry.register("age", Valid::integer().ge(0).seal("age")).unwrap();
    ///
    /// // Duplicate registration fails
    /// assert!(registry.register("age", Valid::nop().seal("age")).is_err());
    /// ```
    pub fn register(&self, name: impl Into<String>, test: NamedTest) -> Result<(), RegistryError> {
        let name = name.into();
        let mut tests = self.tests.write();

        if tests.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::debug!(name = %name, tests = test.tests().len(), "registered named test");
        tests.insert(name, test);
        Ok(())
    }

    /// Retrieves a named test.
    pub fn get(&self, name: &str) -> Option<NamedTest> {
        self.tests.read().get(name).cloned()
    }

    /// Returns true if a test is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.tests.read().contains_key(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tests.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Validates a value against a named test.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the name doesn't exist.
    ///
    /// # Example
    ///
    /// ```rust
    /// use vouch::TestRegistry;
    /// use serde_json::json;
    ///
    /// let registry = TestRegistry::with_builtins();
    /// assert!(registry.validate("even", &json!(4)).unwrap().is_success());
    /// assert!(registry.validate("even", &json!(5)).unwrap().is_failure());
    /// assert!(registry.validate("unknown", &json!(5)).is_err());
    /// ```
    pub fn validate<'a>(
        &self,
        name: &str,
        value: impl Into<Option<&'a Value>>,
    ) -> Result<ValidationResult<()>, RegistryError> {
        let test = self
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        Ok(Chain::from(&test).evaluate(value))
    }
}

impl std::fmt::Debug for TestRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestRegistry")
            .field("names", &self.names())
            .finish()
    }
}

impl Chain {
    /// Appends the tests registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::NotFound` if the name doesn't exist.
    pub fn named(self, registry: &TestRegistry, name: &str) -> Result<Self, RegistryError> {
        let test = registry
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_string()))?;
        Ok(self.then(&test))
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a test with a name that already exists.
    #[error("test '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to use a name that was never registered.
    #[error("test '{0}' not found")]
    NotFound(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Failure;
    use serde_json::json;

    #[test]
    fn test_register_and_get() {
        let registry = TestRegistry::new();
        registry
            .register("positive", Chain::new().number().gt(0).seal("positive"))
            .unwrap();

        let named = registry.get("positive").unwrap();
        assert_eq!(named.name(), "positive");
        assert!(registry.get("negative").is_none());
    }

    #[test]
    fn test_duplicate_name() {
        let registry = TestRegistry::new();
        registry.register("a", Chain::new().nop().seal("a")).unwrap();

        assert_eq!(
            registry.register("a", Chain::new().nop().seal("a")),
            Err(RegistryError::DuplicateName("a".to_string()))
        );
    }

    #[test]
    fn test_builtins_are_registered() {
        let registry = TestRegistry::with_builtins();
        for name in ["integer", "not_blank", "exists", "object", "array"] {
            assert!(registry.contains(name), "missing builtin {}", name);
        }
        let names = registry.names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_validate_by_name() {
        let registry = TestRegistry::with_builtins();
        let result = registry.validate("integer", &json!(1.5)).unwrap();
        assert_eq!(
            result.into_result(),
            Err(Failure::message("must be an integer"))
        );
        assert_eq!(
            registry.validate("nope", None).unwrap_err(),
            RegistryError::NotFound("nope".to_string())
        );
    }

    #[test]
    fn test_named_appends_to_chain() {
        let registry = TestRegistry::with_builtins();
        let chain = Chain::new()
            .optional()
            .named(&registry, "string")
            .unwrap()
            .length(2, Some(3));

        assert!(chain.check(None));
        assert!(chain.check(&json!("ab")));
        assert!(!chain.check(&json!(12)));
        assert!(!chain.check(&json!("abcd")));

        assert!(Chain::new().named(&registry, "missing").is_err());
    }

    #[test]
    fn test_clones_share_storage() {
        let registry = TestRegistry::new();
        let clone = registry.clone();
        clone.register("x", Chain::new().nop().seal("x")).unwrap();
        assert!(registry.contains("x"));
    }
}
