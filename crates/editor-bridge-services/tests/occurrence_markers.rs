use editor_bridge::{HeadlessWidget, Position, PositionRange};
use editor_bridge_services::{DiagnosticEntry, EditorContext, OccurrenceResult, TextRegion};
use serde_json::json;

// "count" is written at 4 and read at 28 and 38.
const TEXT: &str = "let count = 1\nlet sum = 2 + count\nuse(count)";

#[test]
fn test_read_markers_precede_write_markers() {
    let mut context = EditorContext::new(HeadlessWidget::from_text(TEXT));

    let result = OccurrenceResult {
        read_regions: vec![TextRegion::new(28, 5), TextRegion::new(38, 5)],
        write_regions: vec![TextRegion::new(4, 5)],
        state_id: Some("3".to_string()),
    };
    context.show_occurrences(Some(&result));

    let markers: Vec<_> = context
        .occurrence_markers()
        .iter()
        .map(|id| context.widget().marker(*id).unwrap())
        .collect();

    assert_eq!(markers.len(), 3);
    assert_eq!(markers[0].class, "bridge-marker_read");
    assert_eq!(markers[1].class, "bridge-marker_read");
    assert_eq!(markers[2].class, "bridge-marker_write");
    assert_eq!(
        markers[0].range,
        PositionRange::new(Position::new(1, 14), Position::new(1, 19))
    );
    assert_eq!(
        markers[2].range,
        PositionRange::new(Position::new(0, 4), Position::new(0, 9))
    );
}

#[test]
fn test_new_result_replaces_previous_markers() {
    let mut context = EditorContext::new(HeadlessWidget::from_text(TEXT));

    context.show_occurrences(Some(&OccurrenceResult::new(
        vec![TextRegion::new(28, 5)],
        vec![TextRegion::new(4, 5)],
    )));
    let old_ids: Vec<_> = context.occurrence_markers().to_vec();
    assert_eq!(old_ids.len(), 2);

    context.show_occurrences(Some(&OccurrenceResult::new(
        vec![TextRegion::new(38, 5)],
        vec![],
    )));

    for old_id in old_ids {
        assert!(context.widget().marker(old_id).is_none());
    }
    assert_eq!(context.occurrence_markers().len(), 1);
    assert_eq!(context.widget().marker_count(), 1);
}

#[test]
fn test_none_clears_without_adding() {
    let mut context = EditorContext::new(HeadlessWidget::from_text(TEXT));

    context.show_occurrences(Some(&OccurrenceResult::new(
        vec![TextRegion::new(28, 5), TextRegion::new(38, 5)],
        vec![TextRegion::new(4, 5)],
    )));
    assert_eq!(context.widget().marker_count(), 3);

    context.show_occurrences(None);
    assert!(context.occurrence_markers().is_empty());
    assert_eq!(context.widget().marker_count(), 0);
}

#[test]
fn test_occurrences_leave_diagnostics_alone() {
    let mut context = EditorContext::new(HeadlessWidget::from_text(TEXT));

    context.show_markers(&[DiagnosticEntry {
        start_offset: 0,
        end_offset: 3,
        severity: "warning".to_string(),
        description: "keyword".to_string(),
    }]);
    let diagnostic_marker = context.annotations()[0].marker_id;

    context.show_occurrences(Some(&OccurrenceResult::new(
        vec![TextRegion::new(28, 5)],
        vec![],
    )));
    context.show_occurrences(None);

    // The diagnostic marker and its annotation survived both occurrence updates.
    assert!(context.widget().marker(diagnostic_marker).is_some());
    assert_eq!(context.annotations().len(), 1);
    assert_eq!(context.widget().annotations().len(), 1);
}

#[test]
fn test_occurrences_from_wire_payload() {
    let mut context = EditorContext::new(HeadlessWidget::from_text(TEXT));

    let payload = json!({
        "readRegions": [ { "offset": 28, "length": 5 } ],
        "writeRegions": [ { "offset": 4, "length": 5 } ],
        "stateId": "9"
    });
    let result = OccurrenceResult::from_value(&payload).unwrap();
    assert_eq!(result.state_id.as_deref(), Some("9"));

    context.show_occurrences(Some(&result));
    assert_eq!(context.widget().marker_count(), 2);

    // A null payload is the "caret left the identifier" signal.
    let cleared = OccurrenceResult::from_value(&json!(null));
    assert!(cleared.is_none());
    context.show_occurrences(cleared.as_ref());
    assert_eq!(context.widget().marker_count(), 0);
}
