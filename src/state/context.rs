//! The interaction state machine of one diagram editing session.
//!
//! `InteractionStateMachine` turns tool selections and raw pointer events into
//! committed geometry, drag updates and staged proof references. It owns the
//! session's [`EntityStore`], [`IdAllocator`] and [`ProofStepBuilder`]; hosts
//! that edit several diagrams create one machine per diagram.
//!
//! # Event handling
//!
//! - `select_tool`: reset to the tool's initial sub-state, discarding any
//!   buffered construction points and any live drag
//! - `handle_pointer`: interpret a down/move/up event against the current state
//! - `commit_proof_step` / `clear_staged_references`: the proof form actions
//!
//! Every call that changes what the view shows emits its domain events and then
//! exactly one [`EditorEvent::ViewInvalidated`] before returning.
//!
//! # Example
//!
//! ```rust
//! use eframe_geoproof::{InteractionStateMachine, PointerEvent, Tool};
//! use egui::Pos2;
//!
//! let mut editor = InteractionStateMachine::default();
//! editor.select_tool(Tool::AddSegment);
//! editor.handle_pointer(PointerEvent::down(Pos2::new(10.0, 10.0))).unwrap();
//! editor.handle_pointer(PointerEvent::down(Pos2::new(200.0, 10.0))).unwrap();
//! assert_eq!(editor.store().segments().len(), 1);
//! assert!(editor.state().is_idle());
//! ```

use egui::Pos2;
use log::{debug, error, info};
use uuid::Uuid;

use super::editor_state::{InteractionState, SegmentStep, TriangleStep};
use crate::config::EditorConfig;
use crate::element::{Angle, ElementId, Point, Segment, Triangle};
use crate::error::{EditorError, EditorResult};
use crate::event::{EditorEvent, EventBus, EventHandler};
use crate::id_generator::{
    ANGLE_PREFIX, IdAllocator, POINT_PREFIX, SEGMENT_PREFIX, TEMP_POINT_PREFIX, TRIANGLE_PREFIX,
};
use crate::input::{PointerEvent, PointerKind};
use crate::proof::{ProofStep, ProofStepBuilder, StagedReferenceSet};
use crate::store::EntityStore;
use crate::tools::{Anchor, PendingPoint, Tool};

pub const NO_MODE_FEEDBACK: &str = "Mode: None.";
pub const RESET_FEEDBACK: &str = "Error. Mode reset.";

#[derive(Debug)]
pub struct InteractionStateMachine {
    session_id: Uuid,
    state: InteractionState,
    store: EntityStore,
    ids: IdAllocator,
    proof: ProofStepBuilder,
    config: EditorConfig,
    feedback: String,
    event_bus: EventBus,
    /// Set when the view changed since the last `ViewInvalidated`
    dirty: bool,
}

impl Default for InteractionStateMachine {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl InteractionStateMachine {
    /// Creates an idle session with an empty diagram.
    pub fn new(config: EditorConfig) -> Self {
        let session_id = Uuid::new_v4();
        info!("Editing session {} started", session_id);
        Self {
            session_id,
            state: InteractionState::Idle,
            store: EntityStore::new(),
            ids: IdAllocator::new(),
            proof: ProofStepBuilder::new(),
            config,
            feedback: NO_MODE_FEEDBACK.to_owned(),
            event_bus: EventBus::new(),
            dirty: false,
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: EditorConfig) {
        if self.config != config {
            debug!("Editor config updated: {:?}", config);
            self.config = config;
            self.mark_dirty();
            self.flush_invalidation();
        }
    }

    /// Text describing the current mode, updated on every transition
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn active_tool(&self) -> Option<Tool> {
        self.state.active_tool()
    }

    pub fn staged_references(&self) -> &StagedReferenceSet {
        self.proof.staged()
    }

    pub fn drag_target(&self) -> Option<&str> {
        self.state.drag_target()
    }

    /// Construction points that are shown but not yet in the store
    pub fn pending_points(&self) -> impl Iterator<Item = &PendingPoint> {
        self.state.pending_points()
    }

    pub fn list_proof_steps(&self) -> &[ProofStep] {
        self.store.list_proof_steps()
    }

    /// Register a view collaborator
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    /// Switch to `tool`, always starting from its first step.
    ///
    /// Picking [`Tool::SelectForProof`] while already selecting for a proof
    /// turns the mode off instead.
    pub fn select_tool(&mut self, tool: Tool) {
        info!("Tool selected: {}", tool.name());
        if tool == Tool::SelectForProof
            && matches!(self.state, InteractionState::SelectingForProofReference)
        {
            self.transition(InteractionState::Idle);
            self.set_feedback(NO_MODE_FEEDBACK);
        } else {
            self.transition(InteractionState::initial_for(tool));
            self.set_feedback(tool.prompt());
        }
        self.flush_invalidation();
    }

    /// Interpret one pointer event.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidState`] when a construction reaches its
    /// commit step without enough buffered points. The machine has already
    /// recovered to `Idle` when this is returned.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> EditorResult<()> {
        let result = match event.kind {
            PointerKind::Down => {
                debug!(
                    "Pointer down at ({:.1}, {:.1}) in {}",
                    event.pos.x,
                    event.pos.y,
                    self.state.name()
                );
                self.on_pointer_down(event.pos)
            }
            PointerKind::Move => {
                self.on_pointer_move(event.pos, event.is_pointer_down);
                Ok(())
            }
            PointerKind::Up => {
                self.on_pointer_up(event.pos);
                Ok(())
            }
        };

        let result = match result {
            Err(EditorError::InvalidState(reason)) => {
                error!("{}; resetting mode", reason);
                self.transition(InteractionState::Idle);
                self.set_feedback(RESET_FEEDBACK);
                Err(EditorError::InvalidState(reason))
            }
            other => other,
        };
        self.flush_invalidation();
        result
    }

    fn on_pointer_down(&mut self, pos: Pos2) -> EditorResult<()> {
        match self.state.clone() {
            InteractionState::Idle => {
                debug!("Pointer down ignored: no tool active");
                Ok(())
            }
            InteractionState::AddingPoint => self.place_point(pos),
            InteractionState::AddingSegment {
                awaiting: SegmentStep::First,
                mut anchors,
            } => {
                anchors.push(self.resolve_anchor(pos));
                self.transition(InteractionState::AddingSegment {
                    awaiting: SegmentStep::Second,
                    anchors,
                });
                self.set_feedback("Mode: Add Segment. Click 2nd point.");
                Ok(())
            }
            InteractionState::AddingSegment {
                awaiting: SegmentStep::Second,
                anchors,
            } => self.complete_segment(anchors, pos),
            InteractionState::AddingTriangle {
                awaiting: TriangleStep::First,
                mut anchors,
            } => {
                anchors.push(self.resolve_anchor(pos));
                self.transition(InteractionState::AddingTriangle {
                    awaiting: TriangleStep::Second,
                    anchors,
                });
                self.set_feedback("Mode: Add Triangle. Click 2nd point.");
                Ok(())
            }
            InteractionState::AddingTriangle {
                awaiting: TriangleStep::Second,
                mut anchors,
            } => {
                if anchors.is_empty() {
                    return Err(EditorError::InvalidState(
                        "triangle construction lost its 1st point".to_owned(),
                    ));
                }
                anchors.push(self.resolve_anchor(pos));
                self.transition(InteractionState::AddingTriangle {
                    awaiting: TriangleStep::Third,
                    anchors,
                });
                self.set_feedback("Mode: Add Triangle. Click 3rd point.");
                Ok(())
            }
            InteractionState::AddingTriangle {
                awaiting: TriangleStep::Third,
                anchors,
            } => self.complete_triangle(anchors, pos),
            InteractionState::SelectingAndDragging { drag_target: None } => {
                self.begin_drag(pos);
                Ok(())
            }
            InteractionState::SelectingAndDragging {
                drag_target: Some(target),
            } => {
                debug!("Pointer down ignored: already dragging {}", target);
                Ok(())
            }
            InteractionState::SelectingForProofReference => {
                self.toggle_reference_at(pos);
                Ok(())
            }
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, is_pointer_down: bool) {
        let Some(target) = self.state.drag_target().map(str::to_owned) else {
            return;
        };
        if is_pointer_down {
            self.move_point(&target, pos);
        } else {
            debug!("Pointer is not down during drag of {}, treating as release", target);
            self.on_pointer_up(pos);
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2) {
        let Some(target) = self.state.drag_target().map(str::to_owned) else {
            return;
        };
        self.move_point(&target, pos);
        if let Some(point) = self.store.point(&target) {
            info!("Finished dragging: {}", point);
        }
        self.transition(InteractionState::SelectingAndDragging { drag_target: None });
        self.set_feedback(Tool::SelectDrag.prompt());
    }

    fn place_point(&mut self, pos: Pos2) -> EditorResult<()> {
        if let Some(existing) = self.store.find_point_near(pos, self.config.snap_tolerance) {
            let message = format!(
                "Mode: Add Point. Clicked near {}. Choose a different spot.",
                existing.id()
            );
            debug!("Rejected point placement near {}", existing);
            self.set_feedback(&message);
            return Ok(());
        }
        let id = self.ids.next_id(POINT_PREFIX);
        self.add_point(Point::new(id, pos))
    }

    /// Snap to an existing point, or buffer a pending one
    fn resolve_anchor(&mut self, pos: Pos2) -> Anchor {
        if let Some(existing) = self.store.find_point_near(pos, self.config.snap_tolerance) {
            debug!("Snapped to existing {}", existing);
            Anchor::Committed(existing.id().to_owned())
        } else {
            let pending = PendingPoint {
                temp_id: self.ids.next_id(TEMP_POINT_PREFIX),
                pos,
            };
            debug!("Created temporary point {}", pending.temp_id);
            self.mark_dirty();
            Anchor::Pending(pending)
        }
    }

    /// Snap to an existing point, or commit a new one straight away
    fn resolve_permanent(&mut self, pos: Pos2) -> EditorResult<ElementId> {
        if let Some(existing) = self.store.find_point_near(pos, self.config.snap_tolerance) {
            debug!("Snapped to existing {}", existing);
            return Ok(existing.id().to_owned());
        }
        let id = self.ids.next_id(POINT_PREFIX);
        self.add_point(Point::new(id.clone(), pos))?;
        Ok(id)
    }

    fn finalize_anchor(&mut self, anchor: Anchor) -> EditorResult<ElementId> {
        let was_pending = anchor.is_pending();
        let id = anchor.finalize(&mut self.store, &mut self.ids)?;
        if was_pending {
            self.emit(EditorEvent::ElementAdded { id: id.clone() });
        }
        Ok(id)
    }

    fn complete_segment(&mut self, anchors: Vec<Anchor>, pos: Pos2) -> EditorResult<()> {
        let Some(first) = anchors.into_iter().next() else {
            return Err(EditorError::InvalidState(
                "segment construction has no buffered 1st point".to_owned(),
            ));
        };
        let p1 = self.finalize_anchor(first)?;
        let p2 = self.resolve_permanent(pos)?;

        let segment = Segment::new(self.ids.next_id(SEGMENT_PREFIX), p1, p2);
        info!("Segment added: {}", segment);
        let id = segment.id().to_owned();
        self.store.add_segment(segment)?;
        self.emit(EditorEvent::ElementAdded { id });

        self.transition(InteractionState::Idle);
        self.set_feedback("Mode: None. Segment added.");
        Ok(())
    }

    fn complete_triangle(&mut self, anchors: Vec<Anchor>, pos: Pos2) -> EditorResult<()> {
        if anchors.len() < 2 {
            return Err(EditorError::InvalidState(format!(
                "triangle construction has {} buffered points, expected 2",
                anchors.len()
            )));
        }
        let mut anchors = anchors.into_iter();
        let (Some(first), Some(second)) = (anchors.next(), anchors.next()) else {
            return Err(EditorError::InvalidState(
                "triangle construction lost its buffered points".to_owned(),
            ));
        };
        let p1 = self.finalize_anchor(first)?;
        let p2 = self.finalize_anchor(second)?;
        let p3 = self.resolve_permanent(pos)?;

        let triangle = Triangle::new(self.ids.next_id(TRIANGLE_PREFIX), p1, p2, p3);
        info!("Triangle added: {}", triangle);
        let id = triangle.id().to_owned();
        self.store.add_triangle(triangle)?;
        self.emit(EditorEvent::ElementAdded { id });

        self.transition(InteractionState::Idle);
        self.set_feedback("Mode: None. Triangle added.");
        Ok(())
    }

    /// Add an angle between existing points. There is no interactive angle tool.
    ///
    /// # Errors
    ///
    /// [`EditorError::UnknownPoint`] if any id is not a stored point; no id is
    /// allocated in that case.
    pub fn create_angle(&mut self, p1: &str, vertex: &str, p2: &str) -> EditorResult<ElementId> {
        if let Some(missing) = [p1, vertex, p2]
            .into_iter()
            .find(|id| self.store.point(id).is_none())
        {
            return Err(EditorError::UnknownPoint(missing.to_owned()));
        }
        let angle = Angle::new(self.ids.next_id(ANGLE_PREFIX), p1, vertex, p2);
        info!("Angle added: {}", angle);
        let id = angle.id().to_owned();
        self.store.add_angle(angle)?;
        self.emit(EditorEvent::ElementAdded { id: id.clone() });
        self.mark_dirty();
        self.flush_invalidation();
        Ok(id)
    }

    fn begin_drag(&mut self, pos: Pos2) {
        let Some(point) = self.store.find_point_near(pos, self.config.snap_tolerance) else {
            debug!("No point under the pointer to drag");
            return;
        };
        let id = point.id().to_owned();
        debug!("Selected point for drag: {}", point);
        self.transition(InteractionState::SelectingAndDragging {
            drag_target: Some(id.clone()),
        });
        self.set_feedback(&format!("Mode: Dragging {}. Release to drop.", id));
    }

    fn toggle_reference_at(&mut self, pos: Pos2) {
        let Some((kind, id)) = self.store.hit_test(pos, &self.config) else {
            debug!("Nothing to attach at ({:.1}, {:.1})", pos.x, pos.y);
            return;
        };
        let staged = self.proof.toggle_reference(&id);
        debug!(
            "{} {} {} staged references",
            kind.name(),
            id,
            if staged { "added to" } else { "removed from" }
        );
        self.emit(EditorEvent::ReferencesChanged);
        self.mark_dirty();
    }

    /// Turn the staged references plus the given text into a proof step.
    ///
    /// # Errors
    ///
    /// [`EditorError::Validation`] if the trimmed statement or reason is empty;
    /// nothing changes in that case.
    pub fn commit_proof_step(&mut self, statement: &str, reason: &str) -> EditorResult<ProofStep> {
        let had_references = !self.proof.staged().is_empty();
        let step = self
            .proof
            .commit(statement, reason, &mut self.store, &mut self.ids)?;
        self.emit(EditorEvent::ProofStepCommitted {
            id: step.id().to_owned(),
        });
        if had_references {
            self.emit(EditorEvent::ReferencesChanged);
        }
        self.mark_dirty();
        self.flush_invalidation();
        Ok(step)
    }

    pub fn clear_staged_references(&mut self) {
        if self.proof.staged().is_empty() {
            return;
        }
        self.proof.clear();
        debug!("Staged references cleared");
        self.emit(EditorEvent::ReferencesChanged);
        self.mark_dirty();
        self.flush_invalidation();
    }

    fn add_point(&mut self, point: Point) -> EditorResult<()> {
        info!("Point added: {}", point);
        let id = point.id().to_owned();
        self.store.add_point(point)?;
        self.emit(EditorEvent::ElementAdded { id });
        Ok(())
    }

    fn move_point(&mut self, id: &str, pos: Pos2) {
        if self.store.move_point(id, pos) {
            self.emit(EditorEvent::PointMoved {
                id: id.to_owned(),
                pos,
            });
        }
    }

    fn transition(&mut self, new_state: InteractionState) {
        let from = self.state.name();
        self.state = new_state;
        let to = self.state.name();
        debug!("State transition: {} -> {}", from, to);
        self.emit(EditorEvent::StateChanged { from, to });
    }

    fn set_feedback(&mut self, text: &str) {
        if self.feedback != text {
            self.feedback = text.to_owned();
            self.mark_dirty();
        }
    }

    /// Every non-invalidation event is a visible change
    fn emit(&mut self, event: EditorEvent) {
        self.event_bus.emit(event);
        self.mark_dirty();
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn flush_invalidation(&mut self) {
        if std::mem::take(&mut self.dirty) {
            self.event_bus.emit(EditorEvent::ViewInvalidated);
        }
    }
}
