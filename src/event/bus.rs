use std::cell::RefCell;

use super::{EditorEvent, EventHandler};

/// A simple event bus for broadcasting editor events to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit an event to all registered handlers
    pub fn emit(&self, event: EditorEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    struct Recorder(Arc<Mutex<Vec<EditorEvent>>>);

    impl EventHandler for Recorder {
        fn handle_event(&mut self, event: &EditorEvent) {
            self.0.lock().push(event.clone());
        }
    }

    #[test]
    fn test_emit_reaches_every_handler() {
        let first = Arc::new(Mutex::new(Vec::new()));
        let second = Arc::new(Mutex::new(Vec::new()));
        let bus = EventBus::new();
        bus.subscribe(Box::new(Recorder(first.clone())));
        bus.subscribe(Box::new(Recorder(second.clone())));
        assert_eq!(bus.handler_count(), 2);

        bus.emit(EditorEvent::ViewInvalidated);
        assert_eq!(*first.lock(), vec![EditorEvent::ViewInvalidated]);
        assert_eq!(*second.lock(), vec![EditorEvent::ViewInvalidated]);
    }
}
