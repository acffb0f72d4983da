use egui::Pos2;

use crate::element::ElementId;

/// Notifications from the interaction state machine to its view.
///
/// Every mutation is announced by its specific event followed by one
/// `ViewInvalidated`.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorEvent {
    StateChanged {
        from: &'static str,
        to: &'static str,
    },
    ElementAdded {
        id: ElementId,
    },
    PointMoved {
        id: ElementId,
        pos: Pos2,
    },
    ReferencesChanged,
    ProofStepCommitted {
        id: ElementId,
    },
    ViewInvalidated,
}

impl EditorEvent {
    pub fn is_invalidation(&self) -> bool {
        matches!(self, Self::ViewInvalidated)
    }
}
