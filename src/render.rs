//! Short value rendering for use inside messages.

use serde_json::Value;

const MAX_STRING_CHARS: usize = 20;

/// Renders a value the way it appears inside failure messages.
///
/// Strings are single-quoted and cut to 20 characters, the absent value is
/// `undefined`, everything else is compact JSON.
pub(crate) fn escape(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::String(s)) => {
            let cut: String = s.chars().take(MAX_STRING_CHARS).collect();
            format!("'{}'", cut)
        }
        Some(other) => other.to_string(),
    }
}
