use editor_bridge::HeadlessWidget;
use editor_bridge_services::{
    EditorContext, OccurrenceResult, SelectionOffsets, completion_entries_from_value,
    diagnostic_entries_from_value,
};
use serde_json::json;

fn main() {
    let widget = HeadlessWidget::from_text("let total = 1\nshow(total + x)\n");
    let mut context = EditorContext::new(widget);

    context.add_server_state_listener(|state| {
        println!(
            "server acknowledged state {:?} ({} chars)",
            state.state_id,
            state.text.as_deref().map(str::len).unwrap_or(0)
        );
    });
    context.add_dirty_state_listener(|clean| println!("dirty flag -> clean = {clean}"));

    // 1) Push the document to the service and notify on acknowledgement
    let text = context.get_text(None, None);
    let (state, listeners) = context.update_server_state(&text, "1");
    for listener in listeners.iter_mut() {
        listener(state);
    }

    // 2) The service validated and reports a problem region in flat offsets
    let diagnostics = json!([
        { "startOffset": 27, "endOffset": 28, "severity": "error", "description": "unknown symbol x" }
    ]);
    context.show_markers(&diagnostic_entries_from_value(&diagnostics));
    let annotation = &context.annotations()[0];
    println!(
        "annotation at ({}, {}): [{}] {}",
        annotation.row, annotation.column, annotation.kind, annotation.text
    );

    // 3) The caret sits on "total"; the service reports its occurrences
    context.set_caret_offset(21);
    let occurrences = json!({
        "readRegions": [ { "offset": 19, "length": 5 } ],
        "writeRegions": [ { "offset": 4, "length": 5 } ],
        "stateId": "1"
    });
    context.show_occurrences(OccurrenceResult::from_value(&occurrences).as_ref());
    println!(
        "occurrence markers on widget: {}",
        context.occurrence_markers().len()
    );

    // 4) Caret moved off the identifier: the null result clears the highlights
    context.set_caret_offset(12);
    context.show_occurrences(OccurrenceResult::from_value(&json!(null)).as_ref());
    println!(
        "occurrence markers after clear: {}",
        context.occurrence_markers().len()
    );

    // 5) Completion proposals translate into the widget's item shape
    let proposals = json!([
        { "proposal": "total", "description": "let binding", "style": "variable" },
        { "proposal": "to_string", "label": "to_string()", "description": "method" }
    ]);
    let items =
        context.translate_completion_proposals(&completion_entries_from_value(&proposals));
    for item in &items {
        println!("completion: {} (insert {:?})", item.caption, item.value);
    }

    // 6) Select the reported occurrence span and inspect it
    context.set_selection(SelectionOffsets::new(19, 24));
    let selection = context.get_selection();
    println!(
        "selected {:?} = {:?}",
        selection,
        context.get_text(Some(selection.start), Some(selection.end))
    );

    // 7) A local edit makes the editor dirty until the next sync
    context.widget_mut().insert(13, "0");
    context.mark_clean(false);
    println!("is_dirty = {}", context.is_dirty());

    // 8) The service replaced the document wholesale; old undo steps are meaningless now
    context.set_text("let total = 2\nshow(total)\n");
    context.clear_undo_stack();
    context.mark_clean(true);
    println!("replaced text, undo depth = {}", context.widget().undo_depth());
}
