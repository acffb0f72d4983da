mod construction;

pub use construction::{Anchor, PendingPoint};

/// The tools offered by the tools panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    AddPoint,
    AddSegment,
    AddTriangle,
    SelectDrag,
    SelectForProof,
}

impl Tool {
    /// All tools in toolbar order
    pub const ALL: [Tool; 5] = [
        Tool::AddPoint,
        Tool::AddSegment,
        Tool::AddTriangle,
        Tool::SelectDrag,
        Tool::SelectForProof,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AddPoint => "AddPoint",
            Self::AddSegment => "AddSegment",
            Self::AddTriangle => "AddTriangle",
            Self::SelectDrag => "SelectDrag",
            Self::SelectForProof => "SelectForProof",
        }
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            Self::AddPoint => "• Add Point",
            Self::AddSegment => "╱ Add Segment",
            Self::AddTriangle => "△ Add Triangle",
            Self::SelectDrag => "✋ Select & Drag",
            Self::SelectForProof => "☑ Select for Proof",
        }
    }

    /// Feedback shown right after the tool is picked
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::AddPoint => "Mode: Add Point. Click on canvas.",
            Self::AddSegment => "Mode: Add Segment. Click 1st point.",
            Self::AddTriangle => "Mode: Add Triangle. Click 1st point.",
            Self::SelectDrag => "Mode: Select & Drag. Click a point to drag.",
            Self::SelectForProof => "Mode: Select for Proof. Click elements to attach.",
        }
    }
}
