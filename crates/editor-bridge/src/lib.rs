#![warn(missing_docs)]
//! Editor Bridge - Widget Foundation for Offset/Position Translation
//!
//! # Overview
//!
//! `editor-bridge` is the widget-side foundation for connecting offset-addressed language
//! services to row/column text editors. It defines the [`TextWidget`] contract a frontend
//! implements, a Rope-backed [`TextDocument`] that does the coordinate conversion, and a
//! renderless [`HeadlessWidget`] reference implementation for hosts and tests.
//!
//! # Core Features
//!
//! - **Total coordinate conversion**: character offset ↔ `(row, column)` in O(log n), with
//!   out-of-range input clamped instead of rejected
//! - **Marker model**: opaque [`MarkerId`] handles, style classes, and render layers
//! - **Annotation model**: per-position diagnostic decorations installed wholesale
//! - **Headless reference widget**: cursor, selection, markers, annotations, and
//!   snapshot-based undo/redo without a UI toolkit
//! - **Identifier lookup**: [`word_range_at`] finds the identifier under a caret offset
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Service Adapters (editor-bridge-services)  │  ← Offset-addressed callers
//! ├─────────────────────────────────────────────┤
//! │  TextWidget Trait (markers, cursor, undo)   │  ← Widget contract
//! ├─────────────────────────────────────────────┤
//! │  TextDocument (Rope-based conversion)       │  ← Offset ↔ position
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ## Converting Between Offsets and Positions
//!
//! ```rust
//! use editor_bridge::{HeadlessWidget, Position, TextWidget};
//!
//! let mut widget = HeadlessWidget::from_text("fn main() {\n    body\n}\n");
//!
//! // A flat service offset and a widget row/column describe the same place.
//! assert_eq!(widget.offset_to_position(12), Position::new(1, 0));
//! assert_eq!(widget.position_to_offset(Position::new(1, 4)), 16);
//!
//! widget.move_cursor_to(Position::new(1, 4));
//! assert_eq!(widget.cursor_position(), Position::new(1, 4));
//! ```
//!
//! ## Placing and Removing Markers
//!
//! ```rust
//! use editor_bridge::{HeadlessWidget, MarkerLayer, Position, PositionRange, TextWidget};
//!
//! let mut widget = HeadlessWidget::from_text("let total = 0;");
//!
//! let range = PositionRange::new(Position::new(0, 4), Position::new(0, 9));
//! let marker = widget.add_marker(range, "bridge-marker_warning", MarkerLayer::Text);
//! assert_eq!(widget.marker_count(), 1);
//!
//! widget.remove_marker(marker);
//! assert_eq!(widget.marker_count(), 0);
//! ```
//!
//! # Module Description
//!
//! - [`widget`] - The [`TextWidget`] trait and its position/marker/annotation vocabulary
//! - [`document`] - Rope-backed document model with total offset ↔ position conversion
//! - [`headless`] - [`HeadlessWidget`], the renderless reference implementation
//! - [`words`] - Identifier lookup under a caret offset
//!
//! # Unicode Support
//!
//! - Offsets and columns count Unicode scalar values, never bytes
//! - Conversion behaves identically for ASCII, CJK, and combining sequences
//! - Identifier lookup uses Unicode word segmentation

pub mod document;
pub mod headless;
pub mod widget;
pub mod words;

pub use document::TextDocument;
pub use headless::{HeadlessWidget, Marker};
pub use widget::{Annotation, MarkerId, MarkerLayer, Position, PositionRange, TextWidget};
pub use words::{word_at, word_range_at};
