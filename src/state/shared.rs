use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::InteractionStateMachine;

/// A state machine behind one mutex, for hosts that drive the editor from
/// several threads. Every operation runs to completion under the lock, so
/// id allocation and reference toggles never interleave.
#[derive(Debug, Clone, Default)]
pub struct SharedEditor {
    inner: Arc<Mutex<InteractionStateMachine>>,
}

impl SharedEditor {
    pub fn new(machine: InteractionStateMachine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    pub fn lock(&self) -> MutexGuard<'_, InteractionStateMachine> {
        self.inner.lock()
    }

    /// Run `f` with exclusive access to the machine
    pub fn with<R>(&self, f: impl FnOnce(&mut InteractionStateMachine) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::thread;

    use egui::Pos2;

    use super::*;
    use crate::input::PointerEvent;
    use crate::tools::Tool;

    #[test]
    fn test_concurrent_clicks_get_unique_ids() {
        let editor = SharedEditor::default();
        editor.with(|machine| machine.select_tool(Tool::AddPoint));

        let workers: Vec<_> = (0..4)
            .map(|worker| {
                let editor = editor.clone();
                thread::spawn(move || {
                    for i in 0..10 {
                        let pos = Pos2::new(worker as f32 * 1000.0, i as f32 * 100.0);
                        editor.with(|machine| machine.handle_pointer(PointerEvent::down(pos)).unwrap());
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let machine = editor.lock();
        let ids: HashSet<&str> = machine.store().points().iter().map(|p| p.id()).collect();
        assert_eq!(ids.len(), 40);
        assert!(ids.contains("P1") && ids.contains("P40"));
    }
}
