//! Rope-backed document model.
//!
//! Provides the offset ↔ position conversion every service adapter call crosses, using Rope
//! storage for O(log N) line access. Offsets are Unicode scalar values (`char`s), not bytes,
//! so conversion behaves the same for ASCII and multi-byte text.

use crate::widget::{Position, PositionRange};
use ropey::Rope;

/// A text document addressable both by character offset and by `(row, column)` position.
///
/// Conversion is total over `[0, char_count]`: out-of-range rows, columns, and offsets clamp to
/// the nearest valid boundary. Within that range the two directions are exact inverses.
pub struct TextDocument {
    rope: Rope,
}

impl TextDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a document from text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// The whole document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the whole document text.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Total character count.
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total byte count.
    pub fn byte_count(&self) -> usize {
        self.rope.len_bytes()
    }

    /// Total line count. An empty document has one (empty) line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// The text of the given row, without its trailing line break.
    pub fn line_text(&self, row: usize) -> Option<String> {
        if row >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(row).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        if text.ends_with('\r') {
            text.pop();
        }

        Some(text)
    }

    /// Character offset of the start of the given row.
    ///
    /// Rows past the last line clamp to the end of the document.
    pub fn line_start_offset(&self, row: usize) -> usize {
        if row >= self.rope.len_lines() {
            return self.rope.len_chars();
        }
        self.rope.line_to_char(row)
    }

    /// Convert a character offset to a position. Offsets past the end clamp to the final
    /// position.
    pub fn index_to_position(&self, offset: usize) -> Position {
        let offset = offset.min(self.rope.len_chars());
        let row = self.rope.char_to_line(offset);
        let line_start = self.rope.line_to_char(row);
        Position::new(row, offset - line_start)
    }

    /// Convert a position to a character offset.
    ///
    /// The row clamps to the last line; the column clamps to the row's character length
    /// (excluding the line break), so a clamped result still round-trips through
    /// [`index_to_position`](Self::index_to_position).
    pub fn position_to_index(&self, position: Position) -> usize {
        if position.row >= self.rope.len_lines() {
            return self.rope.len_chars();
        }

        let line_start = self.rope.line_to_char(position.row);
        let line_len = if position.row + 1 < self.rope.len_lines() {
            self.rope.line_to_char(position.row + 1) - line_start - 1
        } else {
            self.rope.len_chars() - line_start
        };

        line_start + position.column.min(line_len)
    }

    /// The text spanned by `range` (end-exclusive). Reversed endpoints are normalized.
    pub fn text_range(&self, range: PositionRange) -> String {
        let a = self.position_to_index(range.start);
        let b = self.position_to_index(range.end);
        let (start, end) = (a.min(b), a.max(b));
        self.rope.slice(start..end).to_string()
    }

    /// Insert text at a character offset. Offsets past the end clamp to the end.
    pub fn insert(&mut self, offset: usize, text: &str) {
        let offset = offset.min(self.rope.len_chars());
        self.rope.insert(offset, text);
    }

    /// Delete `len` characters starting at `start`. The range clamps to the document.
    pub fn delete(&mut self, start: usize, len: usize) {
        let start = start.min(self.rope.len_chars());
        let end = (start + len).min(self.rope.len_chars());

        if start < end {
            self.rope.remove(start..end);
        }
    }
}

impl Default for TextDocument {
    fn default() -> Self {
        Self::new()
    }
}
