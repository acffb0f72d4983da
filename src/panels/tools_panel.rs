use egui::Slider;

use crate::GeoProofApp;
use crate::tools::Tool;

pub fn tools_panel(app: &mut GeoProofApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let active_tool = app.editor.active_tool();
            for tool in Tool::ALL {
                if ui.selectable_label(active_tool == Some(tool), tool.label()).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    app.editor.select_tool(tool);
                }
            }
            ui.separator();

            ui.label(app.editor.feedback());
            ui.separator();

            let mut config = app.config.clone();
            egui::CollapsingHeader::new("Settings")
                .default_open(false)
                .show(ui, |ui| {
                    ui.add(Slider::new(&mut config.snap_tolerance, 5.0..=40.0).text("Snap radius"));
                    ui.add(
                        Slider::new(&mut config.segment_hit_tolerance, 5.0..=60.0)
                            .text("Segment radius"),
                    );
                    ui.add(
                        Slider::new(&mut config.triangle_hit_tolerance, 5.0..=80.0)
                            .text("Triangle radius"),
                    );
                    ui.add(
                        Slider::new(&mut config.angle_hit_tolerance, 5.0..=60.0)
                            .text("Angle radius"),
                    );
                    ui.checkbox(&mut config.show_labels, "Show labels");
                });
            if config != app.config {
                app.config = config.clone();
                app.editor.set_config(config);
            }

            ui.separator();
            let store = app.editor.store();
            ui.label(format!(
                "Points: {}  Segments: {}  Triangles: {}  Angles: {}",
                store.points().len(),
                store.segments().len(),
                store.triangles().len(),
                store.angles().len()
            ));
            ui.weak(format!("Session {}", app.editor.session_id()));
        });
}
