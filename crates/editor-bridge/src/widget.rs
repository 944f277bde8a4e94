//! The widget contract and its coordinate vocabulary.
//!
//! A text widget addresses the document as zero-based `(row, column)` positions, while language
//! services address it as flat character offsets. This module defines the position types, the
//! marker/annotation data model, and the [`TextWidget`] trait that an editor frontend implements
//! so service adapters can drive it without knowing its rendering stack.
//!
//! The crate ships one implementation, [`HeadlessWidget`](crate::HeadlessWidget), which is enough
//! for hosts that render elsewhere and for tests.

/// A zero-based widget position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based row (logical line index).
    pub row: usize,
    /// Zero-based column in characters within the row.
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// A position span (`start..end`, end-exclusive), used for selections, marker anchors, and
/// sub-range reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionRange {
    /// Span start position (inclusive).
    pub start: Position,
    /// Span end position (exclusive).
    pub end: Position,
}

impl PositionRange {
    /// Create a new position range.
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Create an empty range collapsed onto a single position.
    pub fn collapsed(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Returns `true` if the range spans no characters.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// An opaque handle for a highlight marker placed on a widget.
///
/// Handles are allocated by the widget and are never reused within one widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(pub u64);

impl MarkerId {
    /// Create a marker id from a raw value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }
}

/// The render layer a marker is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerLayer {
    /// Highlight only the spanned text (the usual layer for diagnostics and occurrences).
    Text,
    /// Highlight the full width of every row the span touches.
    FullLine,
}

/// A diagnostic decoration anchored to a position, rendered by the widget as a gutter icon
/// and/or tooltip.
///
/// Annotations are installed wholesale via [`TextWidget::set_annotations`]; the adapter that
/// produced them keeps the same list so it can remove the paired markers later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    /// Zero-based row of the annotated location.
    pub row: usize,
    /// Zero-based column of the annotated location.
    pub column: usize,
    /// Display text (the diagnostic description).
    pub text: String,
    /// Annotation kind, taken verbatim from the diagnostic severity (e.g. `"error"`).
    pub kind: String,
    /// The highlight marker paired with this annotation.
    pub marker_id: MarkerId,
}

/// The contract a text-editor widget exposes to service adapters.
///
/// All position/offset conversion goes through the widget's own document model, so the adapter
/// never has to second-guess the widget's line-ending or Unicode handling. Conversion is total:
/// out-of-range input clamps to the nearest valid boundary rather than failing.
pub trait TextWidget {
    /// The whole document text.
    fn text(&self) -> String;

    /// Replace the whole document text.
    fn set_text(&mut self, text: &str);

    /// The text spanned by `range` (end-exclusive).
    fn text_range(&self, range: PositionRange) -> String;

    /// Convert a character offset to a widget position.
    fn offset_to_position(&self, offset: usize) -> Position;

    /// Convert a widget position to a character offset.
    fn position_to_offset(&self, position: Position) -> usize;

    /// The current cursor position.
    fn cursor_position(&self) -> Position;

    /// Move the cursor to the given position.
    fn move_cursor_to(&mut self, position: Position);

    /// Returns `true` if the widget has a selection facility.
    ///
    /// Widgets without one (read-only viewers, minimal embeds) return `false`, and callers are
    /// expected to skip [`set_selection_range`](Self::set_selection_range).
    fn supports_selection(&self) -> bool {
        true
    }

    /// The current selection span. An empty (collapsed) range means no selection.
    fn selection_range(&self) -> PositionRange;

    /// Replace the current selection span.
    fn set_selection_range(&mut self, range: PositionRange);

    /// Add a highlight marker over `range`, styled with `class`, on the given render layer.
    fn add_marker(&mut self, range: PositionRange, class: &str, layer: MarkerLayer) -> MarkerId;

    /// Remove a previously added marker. Unknown ids are ignored.
    fn remove_marker(&mut self, marker_id: MarkerId);

    /// Replace the widget's full annotation list (gutter/tooltip display).
    fn set_annotations(&mut self, annotations: Vec<Annotation>);

    /// Discard the widget's entire undo/redo history.
    ///
    /// Used after a destructive full-document replace, where replaying older undo steps would
    /// restore text the server no longer knows about.
    fn reset_undo_history(&mut self);
}
