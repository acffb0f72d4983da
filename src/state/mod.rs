mod editor_state;
pub mod context;
mod shared;

pub use context::InteractionStateMachine;
pub use editor_state::{InteractionState, SegmentStep, TriangleStep};
pub use shared::SharedEditor;
