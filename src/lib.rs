#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod proof;
pub mod renderer;
pub mod state;
pub mod store;
pub mod tools;

pub use app::GeoProofApp;
pub use config::EditorConfig;
pub use element::{ElementId, ElementKind};
pub use error::{EditorError, EditorResult};
pub use event::{EditorEvent, EventBus, EventHandler};
pub use id_generator::IdAllocator;
pub use input::{InputHandler, PointerEvent, PointerKind};
pub use proof::{ProofStep, ProofStepBuilder};
pub use renderer::Renderer;
pub use state::{InteractionState, InteractionStateMachine, SharedEditor};
pub use store::EntityStore;
pub use tools::Tool;
