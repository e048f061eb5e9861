//! Path-keyed mismatch reports produced by the structural matcher.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use serde_json::Value;

use crate::path::JsonPath;

/// One mismatch found by the structural matcher.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    /// Where in the value the mismatch was found.
    pub path: JsonPath,
    /// The offending value, or `None` when the value was absent.
    pub value: Option<Value>,
    /// Human-readable description of the mismatch.
    pub message: String,
}

impl Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Mismatches keyed by rendered path, in the order they were found.
///
/// At most one entry exists per rendered path: recording at a path that
/// already holds an entry is ignored, so the first error at a location wins.
///
/// # Example
///
/// ```rust
/// use vouch::{ErrorReport, JsonPath};
/// use serde_json::json;
///
/// let mut report = ErrorReport::new();
/// let path = JsonPath::root().push_field("a");
///
/// assert!(report.record(&path, Some(&json!(2)), "must equal 1"));
/// assert!(!report.record(&path, Some(&json!(2)), "ignored"));
///
/// assert_eq!(report.len(), 1);
/// assert_eq!(report.message_at(".a"), Some("must equal 1"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ErrorReport {
    entries: IndexMap<String, ReportEntry>,
}

impl ErrorReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a mismatch unless one already exists at the same rendered path.
    ///
    /// Returns true if the entry was added.
    pub fn record(
        &mut self,
        path: &JsonPath,
        value: Option<&Value>,
        message: impl Into<String>,
    ) -> bool {
        let key = path.to_string();
        if self.entries.contains_key(&key) {
            return false;
        }
        self.entries.insert(
            key,
            ReportEntry {
                path: path.clone(),
                value: value.cloned(),
                message: message.into(),
            },
        );
        true
    }

    /// Returns the number of recorded mismatches.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at a rendered path such as `.a[1]`.
    pub fn get(&self, rendered_path: &str) -> Option<&ReportEntry> {
        self.entries.get(rendered_path)
    }

    /// Returns the message recorded at a rendered path.
    pub fn message_at(&self, rendered_path: &str) -> Option<&str> {
        self.get(rendered_path).map(|entry| entry.message.as_str())
    }

    /// Returns true if an entry exists at the rendered path.
    pub fn contains(&self, rendered_path: &str) -> bool {
        self.entries.contains_key(rendered_path)
    }

    /// Returns the rendered paths in the order they were recorded.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Returns an iterator over the entries in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.values()
    }
}

impl Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.values().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}

impl IntoIterator for ErrorReport {
    type Item = ReportEntry;
    type IntoIter = indexmap::map::IntoValues<String, ReportEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}
