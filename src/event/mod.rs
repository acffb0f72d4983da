mod bus;
mod events;

pub use bus::EventBus;
pub use events::EditorEvent;

/// Receives every event emitted by the state machine, synchronously
pub trait EventHandler: Send {
    fn handle_event(&mut self, event: &EditorEvent);
}
