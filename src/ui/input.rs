//! Viewport-Input-Handling: Klick-Selektion und Tiefen-Scroll → AppIntent.

use crate::app::AppIntent;
use crate::core::Projection;

/// Sammelt alle Viewport-Events eines Frames als [`AppIntent`]s.
///
/// Klicks werden bereits beim Einsammeln gegen die übergebene Projektion
/// in Welt-Koordinaten zurückgerechnet; die Größenmeldung desselben
/// Frames wirkt erst ab dem nächsten Frame auf diese Rückprojektion.
pub fn collect_viewport_events(
    ui: &egui::Ui,
    response: &egui::Response,
    viewport_size: [f32; 2],
    projection: &Projection,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    events.push(AppIntent::ViewportResized {
        size: viewport_size,
    });

    if response.clicked_by(egui::PointerButton::Primary) {
        if let Some(pointer_pos) = response.interact_pointer_pos() {
            let world_pos = screen_pos_to_world(pointer_pos, response, projection);
            events.push(AppIntent::ShapePickRequested { world_pos });
        }
    }

    if response.hovered() {
        let (scroll_y, modifiers) = ui.input(|i| (i.raw_scroll_delta.y, i.modifiers));
        if scroll_y != 0.0 {
            // egui-Scroll ist invers zum Intent-Vorzeichen (positiv = runter)
            events.push(AppIntent::DepthScrolled {
                delta_y: -scroll_y,
                shift: modifiers.shift,
                alt: modifiers.alt,
            });
        }
    }

    events
}

/// Rückprojektion einer Pointer-Position in Welt-Koordinaten (XY).
fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    projection: &Projection,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    projection
        .screen_to_world(glam::Vec2::new(local.x, local.y))
        .truncate()
}
