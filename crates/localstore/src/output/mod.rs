//! Output formatting functions.

pub mod json;
pub mod text;

use crate::cli::OutputFormat;

/// Format a looked-up value for output.
pub fn format_value(key: &str, value: Option<&str>, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_value(key, value),
        OutputFormat::Text => text::format_value(value),
    }
}

/// Format the outcome of a mutating command for output.
pub fn format_outcome(operation: &str, changed: bool, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_outcome(operation, changed),
        OutputFormat::Text => text::format_outcome(operation, changed),
    }
}

/// Format a list of keys for output.
pub fn format_keys(keys: &[String], format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_keys(keys),
        OutputFormat::Text => text::format_keys(keys),
    }
}
