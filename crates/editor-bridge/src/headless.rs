//! A headless reference widget.
//!
//! [`HeadlessWidget`] implements the full [`TextWidget`] contract on top of [`TextDocument`]
//! without any rendering. Hosts that draw elsewhere can use it as their document/marker state,
//! and adapter code can be tested against it without a UI toolkit in the loop.

use std::collections::BTreeMap;

use crate::document::TextDocument;
use crate::widget::{Annotation, MarkerId, MarkerLayer, Position, PositionRange, TextWidget};

/// Maximum retained undo snapshots before the oldest is dropped.
const MAX_UNDO_DEPTH: usize = 1000;

/// A highlight marker held by a [`HeadlessWidget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// The widget-assigned handle.
    pub id: MarkerId,
    /// The highlighted span.
    pub range: PositionRange,
    /// The style class the marker renders with.
    pub class: String,
    /// The render layer the marker draws on.
    pub layer: MarkerLayer,
}

/// A renderless [`TextWidget`] implementation.
///
/// Text lives in a [`TextDocument`]; markers, annotations, cursor, and selection are plain
/// state a host can inspect. Edits record whole-text snapshots for undo/redo.
pub struct HeadlessWidget {
    document: TextDocument,
    cursor: Position,
    selection: PositionRange,
    markers: BTreeMap<MarkerId, Marker>,
    annotations: Vec<Annotation>,
    undo_stack: Vec<String>,
    redo_stack: Vec<String>,
    next_marker_id: u64,
}

impl HeadlessWidget {
    /// Create an empty widget.
    pub fn new() -> Self {
        Self {
            document: TextDocument::new(),
            cursor: Position::new(0, 0),
            selection: PositionRange::collapsed(Position::new(0, 0)),
            markers: BTreeMap::new(),
            annotations: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            next_marker_id: 0,
        }
    }

    /// Create a widget holding the given text.
    pub fn from_text(text: &str) -> Self {
        let mut widget = Self::new();
        widget.document.set_text(text);
        widget
    }

    /// The widget's document model.
    pub fn document(&self) -> &TextDocument {
        &self.document
    }

    /// Insert text at a character offset, leaving the cursor after the inserted text.
    pub fn insert(&mut self, offset: usize, text: &str) {
        self.push_undo_snapshot();
        let offset = offset.min(self.document.char_count());
        self.document.insert(offset, text);
        self.cursor = self.document.index_to_position(offset + text.chars().count());
        self.clamp_view_state();
    }

    /// Delete `len` characters starting at `start`, leaving the cursor at the deletion point.
    pub fn delete(&mut self, start: usize, len: usize) {
        self.push_undo_snapshot();
        self.document.delete(start, len);
        self.cursor = self.document.index_to_position(start);
        self.clamp_view_state();
    }

    /// Replace `len` characters starting at `start` with `text`, leaving the cursor after the
    /// replacement.
    pub fn replace_text(&mut self, start: usize, len: usize, text: &str) {
        self.push_undo_snapshot();
        let start = start.min(self.document.char_count());
        self.document.delete(start, len);
        self.document.insert(start, text);
        self.cursor = self.document.index_to_position(start + text.chars().count());
        self.clamp_view_state();
    }

    /// Revert the most recent edit. Returns `false` if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        self.redo_stack.push(self.document.text());
        self.document.set_text(&previous);
        self.clamp_view_state();
        true
    }

    /// Reapply the most recently undone edit. Returns `false` if there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        self.undo_stack.push(self.document.text());
        self.document.set_text(&next);
        self.clamp_view_state();
        true
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of retained undo snapshots.
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Number of retained redo snapshots.
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Look up a marker by handle.
    pub fn marker(&self, marker_id: MarkerId) -> Option<&Marker> {
        self.markers.get(&marker_id)
    }

    /// Iterate over all live markers, ordered by handle.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.values()
    }

    /// Number of live markers.
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// The currently installed annotations.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    fn push_undo_snapshot(&mut self) {
        self.redo_stack.clear();
        if self.undo_stack.len() >= MAX_UNDO_DEPTH {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(self.document.text());
    }

    /// Re-anchor cursor and selection after the text changed under them.
    fn clamp_view_state(&mut self) {
        self.cursor = self.clamp_position(self.cursor);
        self.selection = PositionRange::new(
            self.clamp_position(self.selection.start),
            self.clamp_position(self.selection.end),
        );
    }

    fn clamp_position(&self, position: Position) -> Position {
        self.document
            .index_to_position(self.document.position_to_index(position))
    }
}

impl Default for HeadlessWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl TextWidget for HeadlessWidget {
    fn text(&self) -> String {
        self.document.text()
    }

    fn set_text(&mut self, text: &str) {
        self.push_undo_snapshot();
        self.document.set_text(text);
        self.clamp_view_state();
    }

    fn text_range(&self, range: PositionRange) -> String {
        self.document.text_range(range)
    }

    fn offset_to_position(&self, offset: usize) -> Position {
        self.document.index_to_position(offset)
    }

    fn position_to_offset(&self, position: Position) -> usize {
        self.document.position_to_index(position)
    }

    fn cursor_position(&self) -> Position {
        self.cursor
    }

    fn move_cursor_to(&mut self, position: Position) {
        self.cursor = self.clamp_position(position);
    }

    fn selection_range(&self) -> PositionRange {
        self.selection
    }

    fn set_selection_range(&mut self, range: PositionRange) {
        self.selection = PositionRange::new(
            self.clamp_position(range.start),
            self.clamp_position(range.end),
        );
        self.cursor = self.selection.end;
    }

    fn add_marker(&mut self, range: PositionRange, class: &str, layer: MarkerLayer) -> MarkerId {
        let id = MarkerId::new(self.next_marker_id);
        self.next_marker_id += 1;
        self.markers.insert(
            id,
            Marker {
                id,
                range,
                class: class.to_string(),
                layer,
            },
        );
        id
    }

    fn remove_marker(&mut self, marker_id: MarkerId) {
        self.markers.remove(&marker_id);
    }

    fn set_annotations(&mut self, annotations: Vec<Annotation>) {
        self.annotations = annotations;
    }

    fn reset_undo_history(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
