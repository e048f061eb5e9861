//! Options for structural matching.
//!
//! This module provides [`MatchOptions`], the configuration consumed by every
//! structural match: the error ceiling and whether unknown keys are allowed.

/// Default ceiling on recorded mismatches per match.
pub const DEFAULT_MAX_ERRORS: usize = 20;

/// Configuration for one structural match.
///
/// # Example
///
/// ```rust
/// use vouch::MatchOptions;
///
/// let options = MatchOptions::new().with_max_errors(5).strict(true);
/// assert_eq!(options.max_errors(), 5);
/// assert!(options.is_strict());
///
/// // Zero means "use the default".
/// assert_eq!(MatchOptions::new().with_max_errors(0).max_errors(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    max_errors: usize,
    strict: bool,
}

impl MatchOptions {
    /// Creates options with a ceiling of 20 errors and extra keys allowed.
    pub fn new() -> Self {
        Self {
            max_errors: DEFAULT_MAX_ERRORS,
            strict: false,
        }
    }

    /// Sets the maximum number of mismatches recorded before matching stops.
    ///
    /// A ceiling of zero would let every value through, so it selects the
    /// default instead.
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = if max_errors == 0 {
            DEFAULT_MAX_ERRORS
        } else {
            max_errors
        };
        self
    }

    /// When strict, keys present in a value but not named by a mapping
    /// schema are reported.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns the error ceiling.
    pub fn max_errors(&self) -> usize {
        self.max_errors
    }

    /// Returns true if unknown keys are reported.
    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::new()
    }
}
