use crate::config::EditorConfig;
use crate::event::{EditorEvent, EventHandler};
use crate::input::InputHandler;
use crate::panels::{ProofForm, central_panel, proof_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::InteractionStateMachine;

/// Asks egui for a new frame whenever the editor reports a stale view
struct RepaintOnInvalidate {
    ctx: egui::Context,
}

impl EventHandler for RepaintOnInvalidate {
    fn handle_event(&mut self, event: &EditorEvent) {
        if event.is_invalidation() {
            self.ctx.request_repaint();
        }
    }
}

/// The editor settings survive a restart; the diagram itself is never persisted.
#[derive(Debug)]
pub struct GeoProofApp {
    pub(crate) config: EditorConfig,
    pub(crate) editor: InteractionStateMachine,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    pub(crate) proof_form: ProofForm,
}

/// Settings saved by a previous run, or the defaults
pub fn load_config(storage: Option<&dyn eframe::Storage>) -> EditorConfig {
    storage
        .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
        .unwrap_or_default()
}

impl GeoProofApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let app = Self::with_config(load_config(cc.storage));
        app.editor.subscribe(Box::new(RepaintOnInvalidate {
            ctx: cc.egui_ctx.clone(),
        }));
        app
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            editor: InteractionStateMachine::new(config.clone()),
            config,
            renderer: Renderer::new(),
            input: InputHandler::default(),
            proof_form: ProofForm::default(),
        }
    }

    pub fn editor(&self) -> &InteractionStateMachine {
        &self.editor
    }
}

impl eframe::App for GeoProofApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side panels first so the canvas gets the remaining space
        tools_panel(self, ctx);
        proof_panel(self, ctx);
        central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct MemoryStorage(HashMap<String, String>);

    impl eframe::Storage for MemoryStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.0.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.0.insert(key.to_owned(), value);
        }

        fn flush(&mut self) {}
    }

    #[test]
    fn test_saved_config_is_restored() {
        let config = EditorConfig {
            snap_tolerance: 25.0,
            show_labels: false,
            ..Default::default()
        };
        let mut app = GeoProofApp::with_config(config.clone());
        let mut storage = MemoryStorage::default();
        eframe::App::save(&mut app, &mut storage);

        let saved: &dyn eframe::Storage = &storage;
        assert_eq!(load_config(Some(saved)), config);
        let restored = GeoProofApp::with_config(load_config(Some(saved)));
        assert_eq!(restored.editor().config(), &config);
    }

    #[test]
    fn test_missing_storage_gives_defaults() {
        assert_eq!(load_config(None), EditorConfig::default());
        let empty = MemoryStorage::default();
        assert_eq!(load_config(Some(&empty as &dyn eframe::Storage)), EditorConfig::default());
    }
}
