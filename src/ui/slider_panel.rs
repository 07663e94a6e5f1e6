//! Unteres Slider-Panel: Pointer-Routing und Painting des Range-Sliders.

use crate::app::{AppIntent, AppState};
use crate::core::PaintSurface;
use crate::shared::options;
use crate::ui::paint::EguiSurface;

/// Hintergrundfarbe des Slider-Panels.
const PANEL_CLEAR_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Zeigt das Slider-Panel und sammelt Pointer-Intents für den Slider.
///
/// Down/Move/Up werden direkt aus dem Pointer-Zustand abgeleitet statt
/// über egui-Drags, damit auch Bewegungen unterhalb der Drag-Schwelle
/// und ein Release außerhalb des Panels beim Slider ankommen.
pub fn show_slider_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::bottom("slider_panel")
        .exact_height(options::SLIDER_PANEL_HEIGHT)
        .frame(egui::Frame::NONE)
        .show(ctx, |ui| {
            let (rect, response) =
                ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

            events.extend(collect_slider_events(ui, &response));

            let mut surface = EguiSurface::new(ui.painter(), rect, PANEL_CLEAR_COLOR);
            state.slider.paint(&mut surface);
        });

    events
}

/// Übersetzt den rohen Pointer-Zustand in Slider-Pointer-Intents.
fn collect_slider_events(ui: &egui::Ui, response: &egui::Response) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (pressed, released, down, latest_pos) = ui.input(|i| {
        (
            i.pointer.primary_pressed(),
            i.pointer.primary_released(),
            i.pointer.primary_down(),
            i.pointer.latest_pos(),
        )
    });

    let Some(pointer_pos) = latest_pos else {
        return events;
    };
    let pos = glam::Vec2::new(
        pointer_pos.x - response.rect.min.x,
        pointer_pos.y - response.rect.min.y,
    );

    if pressed && response.rect.contains(pointer_pos) {
        events.push(AppIntent::SliderPointerPressed { pos });
    } else if released {
        events.push(AppIntent::SliderPointerReleased { pos });
    } else if down || response.rect.contains(pointer_pos) {
        // Drag läuft weiter, auch wenn der Pointer das Panel verlässt
        events.push(AppIntent::SliderPointerMoved { pos });
    }

    events
}
