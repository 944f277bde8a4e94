//! Completion-proposal translation (service entries → widget items).
//!
//! The service describes a proposal by its insert text plus optional display metadata; the
//! widget wants a display item keyed by the insert text. Translation is 1:1, order-preserving,
//! and never filters.

use serde_json::Value;

/// One completion proposal as the service reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionEntry {
    /// The text inserted when the proposal is accepted.
    pub proposal: String,
    /// Optional display label shown instead of the raw proposal text.
    pub label: Option<String>,
    /// Optional short description (type, origin).
    pub description: Option<String>,
    /// Optional style keyword for list styling.
    pub style: Option<String>,
}

impl CompletionEntry {
    /// Create an entry carrying only the insert text.
    pub fn new(proposal: impl Into<String>) -> Self {
        Self {
            proposal: proposal.into(),
            label: None,
            description: None,
            style: None,
        }
    }

    /// Parse one entry from its wire value (`proposal`, `label`, `description`, `style`).
    /// Returns `None` when the insert text is missing or mistyped.
    pub fn from_value(value: &Value) -> Option<Self> {
        let proposal = value.get("proposal")?.as_str()?.to_string();
        let label = value.get("label").and_then(Value::as_str).map(String::from);
        let description = value
            .get("description")
            .and_then(Value::as_str)
            .map(String::from);
        let style = value.get("style").and_then(Value::as_str).map(String::from);

        Some(Self {
            proposal,
            label,
            description,
            style,
        })
    }
}

/// Parse a proposal batch from a wire array, skipping malformed elements.
pub fn completion_entries_from_value(value: &Value) -> Vec<CompletionEntry> {
    value
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter_map(CompletionEntry::from_value)
                .collect()
        })
        .unwrap_or_default()
}

/// One completion item in the shape the widget's completion list consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionItem {
    /// The text inserted on acceptance.
    pub value: String,
    /// The text shown in the list.
    pub caption: String,
    /// Short trailing description, when the service supplied one.
    pub meta: Option<String>,
    /// Style class for the list row, when the service supplied one.
    pub class_name: Option<String>,
}

/// Translate service proposals into widget items, preserving length and order.
///
/// The caption falls back to the raw proposal text when no display label is supplied; an
/// empty label counts as absent.
pub fn translate_completion_proposals(entries: &[CompletionEntry]) -> Vec<CompletionItem> {
    entries
        .iter()
        .map(|entry| {
            let caption = entry
                .label
                .clone()
                .filter(|label| !label.is_empty())
                .unwrap_or_else(|| entry.proposal.clone());
            CompletionItem {
                value: entry.proposal.clone(),
                caption,
                meta: entry.description.clone(),
                class_name: entry.style.clone(),
            }
        })
        .collect()
}
