use editor_bridge::{
    Annotation, HeadlessWidget, MarkerId, MarkerLayer, Position, PositionRange, TextWidget,
};
use editor_bridge_services::{EditorContext, SelectionOffsets};

/// A read-mostly widget without a selection facility, delegating everything else.
struct ViewerWidget {
    inner: HeadlessWidget,
    selection_calls: usize,
}

impl ViewerWidget {
    fn from_text(text: &str) -> Self {
        Self {
            inner: HeadlessWidget::from_text(text),
            selection_calls: 0,
        }
    }
}

impl TextWidget for ViewerWidget {
    fn text(&self) -> String {
        self.inner.text()
    }

    fn set_text(&mut self, text: &str) {
        self.inner.set_text(text);
    }

    fn text_range(&self, range: PositionRange) -> String {
        self.inner.text_range(range)
    }

    fn offset_to_position(&self, offset: usize) -> Position {
        self.inner.offset_to_position(offset)
    }

    fn position_to_offset(&self, position: Position) -> usize {
        self.inner.position_to_offset(position)
    }

    fn cursor_position(&self) -> Position {
        self.inner.cursor_position()
    }

    fn move_cursor_to(&mut self, position: Position) {
        self.inner.move_cursor_to(position);
    }

    fn supports_selection(&self) -> bool {
        false
    }

    fn selection_range(&self) -> PositionRange {
        self.inner.selection_range()
    }

    fn set_selection_range(&mut self, range: PositionRange) {
        self.selection_calls += 1;
        self.inner.set_selection_range(range);
    }

    fn add_marker(&mut self, range: PositionRange, class: &str, layer: MarkerLayer) -> MarkerId {
        self.inner.add_marker(range, class, layer)
    }

    fn remove_marker(&mut self, marker_id: MarkerId) {
        self.inner.remove_marker(marker_id);
    }

    fn set_annotations(&mut self, annotations: Vec<Annotation>) {
        self.inner.set_annotations(annotations);
    }

    fn reset_undo_history(&mut self) {
        self.inner.reset_undo_history();
    }
}

#[test]
fn test_get_text_spans_and_whole_document() {
    let context = EditorContext::new(HeadlessWidget::from_text("héllo\nwörld"));

    assert_eq!(context.get_text(None, None), "héllo\nwörld");
    assert_eq!(context.get_text(Some(6), Some(11)), "wörld");
    assert_eq!(context.get_text(Some(4), Some(8)), "o\nwö");
}

#[test]
fn test_set_text_replaces_whole_document() {
    let mut context = EditorContext::new(HeadlessWidget::from_text("before"));

    context.set_text("after\nmore");
    assert_eq!(context.get_text(None, None), "after\nmore");
    assert_eq!(context.widget().document().line_count(), 2);
}

#[test]
fn test_caret_clamps_past_end() {
    let mut context = EditorContext::new(HeadlessWidget::from_text("12345"));

    context.set_caret_offset(999);
    assert_eq!(context.get_caret_offset(), 5);
}

#[test]
fn test_selection_round_trip_via_offsets() {
    let mut context = EditorContext::new(HeadlessWidget::from_text("let count = 1"));

    context.set_selection(SelectionOffsets::new(4, 9));
    assert_eq!(context.get_selection(), SelectionOffsets::new(4, 9));
    assert_eq!(
        context.widget().text_range(context.widget().selection_range()),
        "count"
    );
}

#[test]
fn test_selection_setter_skipped_without_selection_support() {
    let mut context = EditorContext::new(ViewerWidget::from_text("some text"));

    context.set_selection(SelectionOffsets::new(0, 4));

    assert_eq!(context.widget().selection_calls, 0);
    // Reading the (empty) selection stays available.
    assert_eq!(context.get_selection(), SelectionOffsets::new(0, 0));
}

#[test]
fn test_clear_undo_stack_through_context() {
    let mut context = EditorContext::new(HeadlessWidget::from_text("start"));

    context.widget_mut().insert(5, "!");
    context.widget_mut().insert(6, "?");
    assert!(context.widget().can_undo());

    context.clear_undo_stack();
    assert!(!context.widget().can_undo());
    assert!(!context.widget().can_redo());
    assert_eq!(context.get_text(None, None), "start!?");
}

#[test]
fn test_line_start_clamps_past_last_line() {
    let context = EditorContext::new(HeadlessWidget::from_text("ab\ncd"));

    assert_eq!(context.get_line_start(0), 0);
    assert_eq!(context.get_line_start(1), 3);
    assert_eq!(context.get_line_start(99), 5);
}
