//! JSON output formatting.

use serde_json::json;

/// Format a looked-up value as JSON. A missing key renders as `null`.
pub fn format_value(key: &str, value: Option<&str>) -> String {
    json!({ "key": key, "value": value }).to_string()
}

/// Format a mutation outcome as JSON.
pub fn format_outcome(operation: &str, changed: bool) -> String {
    json!({ "operation": operation, "changed": changed }).to_string()
}

/// Format keys as a JSON array.
pub fn format_keys(keys: &[String]) -> String {
    json!(keys).to_string()
}
