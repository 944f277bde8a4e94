//! Diagnostic payloads from the language service.
//!
//! The service reports problem regions in flat character offsets. Wire values are parsed
//! field by field; a malformed entry is skipped rather than failing the batch.

use serde_json::Value;

/// One problem region reported by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    /// Start of the diagnosed span (inclusive character offset).
    pub start_offset: usize,
    /// End of the diagnosed span (exclusive character offset).
    pub end_offset: usize,
    /// Severity keyword in the service's vocabulary (e.g. `"error"`, `"warning"`, `"info"`).
    pub severity: String,
    /// Human-readable description, shown as the annotation text.
    pub description: String,
}

impl DiagnosticEntry {
    /// Parse one diagnostic from its wire value (`startOffset`, `endOffset`, `severity`,
    /// `description`). Returns `None` when a required field is missing or mistyped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let start_offset = value.get("startOffset")?.as_u64()? as usize;
        let end_offset = value.get("endOffset")?.as_u64()? as usize;
        let severity = value.get("severity")?.as_str()?.to_string();
        let description = value.get("description")?.as_str()?.to_string();

        Some(Self {
            start_offset,
            end_offset,
            severity,
            description,
        })
    }
}

/// Parse a diagnostic batch from a wire array, skipping malformed elements.
///
/// A non-array value yields an empty batch.
pub fn diagnostic_entries_from_value(value: &Value) -> Vec<DiagnosticEntry> {
    value
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(DiagnosticEntry::from_value)
                .collect()
        })
        .unwrap_or_default()
}
