use editor_bridge::{
    HeadlessWidget, MarkerLayer, Position, PositionRange, TextWidget, word_at,
};

fn main() {
    let mut widget = HeadlessWidget::from_text("fn main() {\n    let total = 0;\n}\n");

    // 1) Offset ↔ position conversion
    let offset = widget.position_to_offset(Position::new(1, 8));
    println!("(1, 8) is character offset {}", offset);
    println!("offset 12 is {:?}", widget.offset_to_position(12));

    // 2) Identifier under an offset
    let text = widget.text();
    println!("word at offset {}: {:?}", offset, word_at(&text, offset));

    // 3) Markers and annotations
    let range = PositionRange::new(Position::new(1, 8), Position::new(1, 13));
    let marker = widget.add_marker(range, "bridge-marker_warning", MarkerLayer::Text);
    println!("placed marker {:?} over {:?}", marker, widget.text_range(range));
    widget.remove_marker(marker);
    println!("markers after removal: {}", widget.marker_count());

    // 4) Editing with undo history
    widget.insert(widget.position_to_offset(Position::new(1, 13)), "_count");
    println!("after insert:\n{}", widget.text());
    widget.undo();
    println!("after undo:\n{}", widget.text());

    // 5) Selection
    widget.set_selection_range(PositionRange::new(
        Position::new(1, 4),
        Position::new(1, 18),
    ));
    println!("selected: {:?}", widget.text_range(widget.selection_range()));
}
