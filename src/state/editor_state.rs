//! The interaction state machine's states.
//!
//! ```text
//! toolSelected(tool) from any state ──► initial sub-state of `tool`
//!
//! AddingPoint ──down──► AddingPoint
//! AddingSegment(First) ──down──► AddingSegment(Second) ──down──► Idle
//! AddingTriangle(First) ──► (Second) ──► (Third) ──down──► Idle
//! SelectingAndDragging(None) ──down on point──► (Some) ──up──► (None)
//! SelectingForProofReference ──selectForProof again──► Idle
//! ```
//!
//! Buffered construction points live inside the construction variants, so a
//! drag can never coexist with a half-built triangle.
use crate::element::ElementId;
use crate::tools::{Anchor, PendingPoint, Tool};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentStep {
    First,
    Second,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriangleStep {
    First,
    Second,
    Third,
}

/// The possible states of the editor
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    /// No tool active; pointer input is ignored
    #[default]
    Idle,
    /// Every click places a new point
    AddingPoint,
    AddingSegment {
        awaiting: SegmentStep,
        anchors: Vec<Anchor>,
    },
    AddingTriangle {
        awaiting: TriangleStep,
        anchors: Vec<Anchor>,
    },
    /// `drag_target` is set between pointer-down on a point and pointer-up
    SelectingAndDragging {
        drag_target: Option<ElementId>,
    },
    SelectingForProofReference,
}

impl InteractionState {
    /// The initial sub-state of `tool`, with an empty construction buffer
    pub fn initial_for(tool: Tool) -> Self {
        match tool {
            Tool::AddPoint => Self::AddingPoint,
            Tool::AddSegment => Self::AddingSegment {
                awaiting: SegmentStep::First,
                anchors: Vec::new(),
            },
            Tool::AddTriangle => Self::AddingTriangle {
                awaiting: TriangleStep::First,
                anchors: Vec::new(),
            },
            Tool::SelectDrag => Self::SelectingAndDragging { drag_target: None },
            Tool::SelectForProof => Self::SelectingForProofReference,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AddingPoint => "AddingPoint",
            Self::AddingSegment { awaiting: SegmentStep::First, .. } => "AddingSegment(First)",
            Self::AddingSegment { awaiting: SegmentStep::Second, .. } => "AddingSegment(Second)",
            Self::AddingTriangle { awaiting: TriangleStep::First, .. } => "AddingTriangle(First)",
            Self::AddingTriangle { awaiting: TriangleStep::Second, .. } => "AddingTriangle(Second)",
            Self::AddingTriangle { awaiting: TriangleStep::Third, .. } => "AddingTriangle(Third)",
            Self::SelectingAndDragging { drag_target: None } => "SelectingAndDragging",
            Self::SelectingAndDragging { drag_target: Some(_) } => "SelectingAndDragging(Dragging)",
            Self::SelectingForProofReference => "SelectingForProofReference",
        }
    }

    /// The tool whose mode this is, if any
    pub fn active_tool(&self) -> Option<Tool> {
        match self {
            Self::Idle => None,
            Self::AddingPoint => Some(Tool::AddPoint),
            Self::AddingSegment { .. } => Some(Tool::AddSegment),
            Self::AddingTriangle { .. } => Some(Tool::AddTriangle),
            Self::SelectingAndDragging { .. } => Some(Tool::SelectDrag),
            Self::SelectingForProofReference => Some(Tool::SelectForProof),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns the point being dragged, if a drag is live
    pub fn drag_target(&self) -> Option<&str> {
        match self {
            Self::SelectingAndDragging { drag_target } => drag_target.as_deref(),
            _ => None,
        }
    }

    /// Points buffered by an unfinished segment or triangle
    pub fn anchors(&self) -> &[Anchor] {
        match self {
            Self::AddingSegment { anchors, .. } | Self::AddingTriangle { anchors, .. } => anchors,
            _ => &[],
        }
    }

    /// Buffered anchors that have not been committed to the store yet
    pub fn pending_points(&self) -> impl Iterator<Item = &PendingPoint> {
        self.anchors().iter().filter_map(|anchor| match anchor {
            Anchor::Pending(pending) => Some(pending),
            Anchor::Committed(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_states() {
        for tool in Tool::ALL {
            let state = InteractionState::initial_for(tool);
            assert_eq!(state.active_tool(), Some(tool));
            assert!(state.anchors().is_empty());
            assert_eq!(state.drag_target(), None);
        }
        assert!(InteractionState::default().is_idle());
    }

    #[test]
    fn test_state_names() {
        let state = InteractionState::AddingTriangle {
            awaiting: TriangleStep::Third,
            anchors: Vec::new(),
        };
        assert_eq!(state.name(), "AddingTriangle(Third)");
        let state = InteractionState::SelectingAndDragging {
            drag_target: Some("P1".into()),
        };
        assert_eq!(state.drag_target(), Some("P1"));
    }
}
