#![warn(missing_docs)]
//! `editor-bridge-services` - Language-service adapters for `editor-bridge`.
//!
//! This crate contains the service-facing side of the bridge: [`EditorContext`], which
//! mediates between a language service speaking character offsets and a
//! [`TextWidget`](editor_bridge::TextWidget) speaking `(row, column)` positions, plus the
//! typed payloads the service produces (diagnostics, occurrences, completion proposals) with
//! `serde_json::Value` parsers for each.
//!
//! # Quick Start
//!
//! ```rust
//! use editor_bridge::HeadlessWidget;
//! use editor_bridge_services::{DiagnosticEntry, EditorContext};
//!
//! let widget = HeadlessWidget::from_text("let x = 1\nlet y = x + z\n");
//! let mut context = EditorContext::new(widget);
//!
//! // The service reports a problem region in flat offsets; the context places a marker
//! // and an annotation on the widget in its own coordinates.
//! context.show_markers(&[DiagnosticEntry {
//!     start_offset: 22,
//!     end_offset: 23,
//!     severity: "error".to_string(),
//!     description: "unknown symbol z".to_string(),
//! }]);
//!
//! assert_eq!(context.annotations().len(), 1);
//! assert_eq!(context.annotations()[0].row, 1);
//! assert_eq!(context.annotations()[0].column, 12);
//! assert_eq!(context.widget().marker_count(), 1);
//! ```

pub mod completion;
pub mod context;
pub mod diagnostics;
pub mod occurrences;

pub use completion::{
    CompletionEntry, CompletionItem, completion_entries_from_value,
    translate_completion_proposals,
};
pub use context::{
    ContextOptions, DirtyStateListener, EditorContext, SelectionOffsets, ServerState,
    ServerStateListener,
};
pub use diagnostics::{DiagnosticEntry, diagnostic_entries_from_value};
pub use occurrences::{OccurrenceResult, TextRegion};
