use crate::GeoProofApp;

/// Text fields of the proof-step form
#[derive(Debug, Default, Clone)]
pub struct ProofForm {
    pub statement: String,
    pub reason: String,
    pub error: Option<String>,
}

impl ProofForm {
    pub fn clear(&mut self) {
        self.statement.clear();
        self.reason.clear();
        self.error = None;
    }
}

pub fn proof_panel(app: &mut GeoProofApp, ctx: &egui::Context) {
    egui::SidePanel::right("proof_panel")
        .resizable(true)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Proof");

            let staged = app.editor.staged_references();
            let staged_text = if staged.is_empty() {
                "(none)".to_owned()
            } else {
                staged.summary()
            };
            ui.label(format!("Referenced elements: {}", staged_text));

            egui::Grid::new("proof_form_grid")
                .num_columns(2)
                .spacing([8.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Statement");
                    ui.text_edit_singleline(&mut app.proof_form.statement);
                    ui.end_row();

                    ui.label("Reason");
                    ui.text_edit_singleline(&mut app.proof_form.reason);
                    ui.end_row();
                });

            ui.horizontal(|ui| {
                if ui.button("Add Step").clicked() {
                    let form = &mut app.proof_form;
                    match app.editor.commit_proof_step(&form.statement, &form.reason) {
                        Ok(_) => form.clear(),
                        Err(err) => form.error = Some(err.to_string()),
                    }
                }
                if ui.button("Clear Selection").clicked() {
                    app.editor.clear_staged_references();
                }
            });

            if let Some(error) = &app.proof_form.error {
                ui.colored_label(ui.visuals().error_fg_color, error);
            }

            ui.separator();
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (index, step) in app.editor.list_proof_steps().iter().enumerate() {
                    ui.label(format!("{}. {}", index + 1, step));
                }
            });
        });
}
