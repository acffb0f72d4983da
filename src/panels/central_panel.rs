use crate::GeoProofApp;

/// The drawing canvas: forwards pointer input, then draws the current diagram
pub fn central_panel(app: &mut GeoProofApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            app.input.set_canvas_rect(canvas_rect);
            for event in app.input.process_input(ctx) {
                if let Err(err) = app.editor.handle_pointer(event) {
                    log::warn!("Pointer event not applied: {}", err);
                }
            }

            app.renderer.render(&painter, canvas_rect, &app.editor);
        });
}
