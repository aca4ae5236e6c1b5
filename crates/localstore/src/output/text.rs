//! Plain text output formatting.

/// Format a looked-up value. A missing key renders as nothing.
pub fn format_value(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

/// Format a mutation outcome.
pub fn format_outcome(operation: &str, changed: bool) -> String {
    let verb = match operation {
        "set" => "Stored",
        "remove" => "Removed",
        "clear" => "Cleared",
        other => other,
    };
    if changed {
        format!("{verb}.")
    } else {
        format!("{verb}: nothing changed.")
    }
}

/// Format keys, one per line.
pub fn format_keys(keys: &[String]) -> String {
    keys.join("\n")
}
