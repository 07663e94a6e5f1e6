//! Top-Menü (View, Slider).

use crate::app::{AppIntent, AppState};

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("View", |ui| {
                if ui.button("Reset Depth").clicked() {
                    events.push(AppIntent::ResetViewRequested);
                    ui.close();
                }

                ui.separator();

                let flicker_label = if state.options.flicker_selection {
                    "Flicker Selection ✔"
                } else {
                    "Flicker Selection"
                };
                if ui.button(flicker_label).clicked() {
                    events.push(AppIntent::FlickerToggled);
                    ui.close();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Slider", |ui| {
                let selectable_label = if state.slider.selectable() {
                    "Selectable ✔"
                } else {
                    "Selectable"
                };
                if ui.button(selectable_label).clicked() {
                    events.push(AppIntent::SliderSelectableToggled);
                    ui.close();
                }

                ui.separator();

                if ui.button("Center Current").clicked() {
                    let mid = (state.slider.min() + state.slider.max()) / 2.0;
                    events.push(AppIntent::SliderCurrentChangeRequested { value: mid });
                    ui.close();
                }

                if ui.button("Reset Range").clicked() {
                    events.push(AppIntent::SliderLeftChangeRequested {
                        value: state.slider.min(),
                    });
                    events.push(AppIntent::SliderRightChangeRequested {
                        value: state.slider.max(),
                    });
                    ui.close();
                }
            });
        });
    });

    events
}
