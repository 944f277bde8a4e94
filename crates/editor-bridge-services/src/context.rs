//! The editor context, one per open document/widget pairing.
//!
//! [`EditorContext`] mediates between a language service speaking character offsets and a
//! text widget speaking `(row, column)` positions. It tracks the last text/state-id pair the
//! service has seen, a per-editor scratch map for client services, a dirty flag with change
//! listeners, and the markers it has placed on the widget for diagnostics and occurrences so
//! each new batch can atomically replace the previous one.

use std::collections::HashMap;

use editor_bridge::{Annotation, MarkerId, MarkerLayer, Position, PositionRange, TextWidget};
use serde_json::Value;

use crate::completion::{CompletionEntry, CompletionItem};
use crate::diagnostics::DiagnosticEntry;
use crate::occurrences::OccurrenceResult;

/// Listener invoked with the stored server state after an update.
pub type ServerStateListener = Box<dyn FnMut(&ServerState) + Send>;

/// Listener invoked with the new value on a dirty-flag transition.
pub type DirtyStateListener = Box<dyn FnMut(bool) + Send>;

/// The last text and state id the language service acknowledged.
///
/// Both fields are `None` until the first [`EditorContext::update_server_state`] call; hosts
/// use the absence of a state id to decide between full-text and delta update requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerState {
    /// Document text at the last acknowledged update.
    pub text: Option<String>,
    /// Opaque version token for the server-side parse state.
    pub state_id: Option<String>,
}

/// A selection expressed in character offsets (`start..end`, end-exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionOffsets {
    /// Selection start offset (inclusive).
    pub start: usize,
    /// Selection end offset (exclusive).
    pub end: usize,
}

impl SelectionOffsets {
    /// Create a new selection span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

#[derive(Debug, Clone)]
/// Options controlling how the context styles the markers it places.
pub struct ContextOptions {
    /// Prefix for every marker style class; the severity keyword (or `read`/`write` for
    /// occurrences) is appended to it.
    pub marker_class_prefix: String,
    /// Render layer for every marker the context places.
    pub marker_layer: MarkerLayer,
}

impl Default for ContextOptions {
    fn default() -> Self {
        Self {
            marker_class_prefix: "bridge-marker_".to_string(),
            marker_layer: MarkerLayer::Text,
        }
    }
}

/// Mediator between one language-service session and one text widget.
///
/// The context owns the widget; hosts reach it through [`widget`](Self::widget) /
/// [`widget_mut`](Self::widget_mut). All service-facing operations address the document in
/// character offsets and are translated here into the widget's position vocabulary.
pub struct EditorContext<W: TextWidget> {
    widget: W,
    options: ContextOptions,
    server_state: ServerState,
    server_state_listeners: Vec<ServerStateListener>,
    client_service_state: HashMap<String, Value>,
    clean: bool,
    dirty_state_listeners: Vec<DirtyStateListener>,
    annotations: Vec<Annotation>,
    occurrence_markers: Vec<MarkerId>,
}

impl<W: TextWidget> EditorContext<W> {
    /// Create a context around a widget with default options.
    pub fn new(widget: W) -> Self {
        Self::with_options(widget, ContextOptions::default())
    }

    /// Create a context around a widget with explicit options.
    pub fn with_options(widget: W, options: ContextOptions) -> Self {
        Self {
            widget,
            options,
            server_state: ServerState::default(),
            server_state_listeners: Vec::new(),
            client_service_state: HashMap::new(),
            clean: true,
            dirty_state_listeners: Vec::new(),
            annotations: Vec::new(),
            occurrence_markers: Vec::new(),
        }
    }

    /// The wrapped widget.
    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// The wrapped widget, mutably.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// The marker styling options this context was built with.
    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    /// The last acknowledged server state.
    pub fn server_state(&self) -> &ServerState {
        &self.server_state
    }

    /// Record the text/state-id pair the service has acknowledged.
    ///
    /// Listeners are NOT invoked here. The stored state and the listener registry are
    /// returned together so the caller that triggered the update performs the notification
    /// itself, in registration order:
    ///
    /// ```
    /// # use editor_bridge::HeadlessWidget;
    /// # use editor_bridge_services::EditorContext;
    /// # let mut context = EditorContext::new(HeadlessWidget::new());
    /// let (state, listeners) = context.update_server_state("let x = 1;", "7");
    /// for listener in listeners.iter_mut() {
    ///     listener(state);
    /// }
    /// ```
    pub fn update_server_state(
        &mut self,
        text: &str,
        state_id: &str,
    ) -> (&ServerState, &mut Vec<ServerStateListener>) {
        self.server_state.text = Some(text.to_string());
        self.server_state.state_id = Some(state_id.to_string());
        (&self.server_state, &mut self.server_state_listeners)
    }

    /// Register a server-state listener. Listeners cannot be removed.
    pub fn add_server_state_listener<F>(&mut self, listener: F)
    where
        F: FnMut(&ServerState) + Send + 'static,
    {
        self.server_state_listeners.push(Box::new(listener));
    }

    /// Scratch state for client-side services, keyed by service name.
    pub fn client_service_state(&self) -> &HashMap<String, Value> {
        &self.client_service_state
    }

    /// Scratch state for client-side services, mutably.
    pub fn client_service_state_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.client_service_state
    }

    /// Drop all client-service scratch state.
    pub fn clear_client_service_state(&mut self) {
        self.client_service_state.clear();
    }

    /// Whether the document has unsynchronized edits.
    pub fn is_dirty(&self) -> bool {
        !self.clean
    }

    /// Set the clean flag, notifying dirty-state listeners only on an actual transition.
    ///
    /// Listeners observe the pre-transition flag through [`is_dirty`](Self::is_dirty); the
    /// new value is committed after they ran. Repeating the current value is a listener
    /// no-op.
    pub fn mark_clean(&mut self, clean: bool) {
        if clean != self.clean {
            for listener in &mut self.dirty_state_listeners {
                listener(clean);
            }
        }
        self.clean = clean;
    }

    /// Register a dirty-state listener. Listeners cannot be removed.
    pub fn add_dirty_state_listener<F>(&mut self, listener: F)
    where
        F: FnMut(bool) + Send + 'static,
    {
        self.dirty_state_listeners.push(Box::new(listener));
    }

    /// The document text between two character offsets (end-exclusive), or the whole
    /// document when either bound is absent.
    pub fn get_text(&self, start: Option<usize>, end: Option<usize>) -> String {
        match (start, end) {
            (Some(start), Some(end)) => {
                let range = PositionRange::new(
                    self.widget.offset_to_position(start),
                    self.widget.offset_to_position(end),
                );
                self.widget.text_range(range)
            }
            _ => self.widget.text(),
        }
    }

    /// Replace the whole document text.
    pub fn set_text(&mut self, text: &str) {
        self.widget.set_text(text);
    }

    /// The caret location as a character offset.
    pub fn get_caret_offset(&self) -> usize {
        self.widget.position_to_offset(self.widget.cursor_position())
    }

    /// Move the caret to a character offset.
    pub fn set_caret_offset(&mut self, offset: usize) {
        let position = self.widget.offset_to_position(offset);
        self.widget.move_cursor_to(position);
    }

    /// The current selection as character offsets.
    pub fn get_selection(&self) -> SelectionOffsets {
        let range = self.widget.selection_range();
        SelectionOffsets {
            start: self.widget.position_to_offset(range.start),
            end: self.widget.position_to_offset(range.end),
        }
    }

    /// Select the span between two character offsets.
    ///
    /// A no-op when the widget has no selection facility.
    pub fn set_selection(&mut self, selection: SelectionOffsets) {
        if !self.widget.supports_selection() {
            return;
        }

        let range = PositionRange::new(
            self.widget.offset_to_position(selection.start),
            self.widget.offset_to_position(selection.end),
        );
        self.widget.set_selection_range(range);
    }

    /// Character offset of the start of the given line.
    pub fn get_line_start(&self, row: usize) -> usize {
        self.widget.position_to_offset(Position::new(row, 0))
    }

    /// Discard the widget's entire undo/redo history.
    pub fn clear_undo_stack(&mut self) {
        self.widget.reset_undo_history();
    }

    /// Replace the displayed diagnostics with a new batch.
    ///
    /// Every marker from the previous batch is removed before any new marker is added. Each
    /// entry gets one marker over its converted span, with style class
    /// `"<prefix><severity>"`, and one annotation at the span's start position; the rebuilt
    /// annotation list is installed on the widget wholesale. Entries are processed in input
    /// order, without sorting or dedup.
    pub fn show_markers(&mut self, entries: &[DiagnosticEntry]) {
        for annotation in &self.annotations {
            self.widget.remove_marker(annotation.marker_id);
        }
        self.annotations.clear();

        for entry in entries {
            let marker_id =
                self.add_region_marker(entry.start_offset, entry.end_offset, &entry.severity);
            let start = self.widget.offset_to_position(entry.start_offset);
            self.annotations.push(Annotation {
                row: start.row,
                column: start.column,
                text: entry.description.clone(),
                kind: entry.severity.clone(),
                marker_id,
            });
        }

        self.widget.set_annotations(self.annotations.clone());
    }

    /// Replace the displayed occurrence highlights with a new result.
    ///
    /// Every marker from the previous result is removed first. `Some` adds one marker per
    /// read region (class `"<prefix>read"`), then one per write region (class
    /// `"<prefix>write"`), in region order. `None` means the caret is not on an identifier:
    /// clear and add nothing. Annotations are untouched.
    pub fn show_occurrences(&mut self, result: Option<&OccurrenceResult>) {
        for marker_id in &self.occurrence_markers {
            self.widget.remove_marker(*marker_id);
        }
        self.occurrence_markers.clear();

        let Some(result) = result else {
            return;
        };

        for region in &result.read_regions {
            let marker_id = self.add_region_marker(region.offset, region.end_offset(), "read");
            self.occurrence_markers.push(marker_id);
        }
        for region in &result.write_regions {
            let marker_id = self.add_region_marker(region.offset, region.end_offset(), "write");
            self.occurrence_markers.push(marker_id);
        }
    }

    /// Translate service completion proposals into the widget's item shape.
    ///
    /// Same length and order as the input; the caption falls back to the raw proposal text
    /// when no display label is supplied; an empty label counts as absent.
    pub fn translate_completion_proposals(
        &self,
        entries: &[CompletionEntry],
    ) -> Vec<CompletionItem> {
        crate::completion::translate_completion_proposals(entries)
    }

    /// The annotations installed by the most recent [`show_markers`](Self::show_markers)
    /// call.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// The markers placed by the most recent [`show_occurrences`](Self::show_occurrences)
    /// call.
    pub fn occurrence_markers(&self) -> &[MarkerId] {
        &self.occurrence_markers
    }

    fn add_region_marker(
        &mut self,
        start_offset: usize,
        end_offset: usize,
        class_suffix: &str,
    ) -> MarkerId {
        let class = format!("{}{}", self.options.marker_class_prefix, class_suffix);
        let range = PositionRange::new(
            self.widget.offset_to_position(start_offset),
            self.widget.offset_to_position(end_offset),
        );
        self.widget.add_marker(range, &class, self.options.marker_layer)
    }
}
