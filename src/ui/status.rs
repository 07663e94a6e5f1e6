//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Shapes: {}", state.shape_count()));

            ui.separator();

            ui.label(format!("Depth: {:.1}", state.view.projection.depth_offset));

            ui.separator();

            ui.label(format!(
                "Range: {} | {} | {}",
                state.slider.left(),
                state.slider.current(),
                state.slider.right()
            ));

            if let Some(message) = &state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(message).color(egui::Color32::LIGHT_YELLOW));
            }
        });
    });
}
