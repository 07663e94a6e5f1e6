//! Handler für Session, Viewport und Projektion.

use glam::Vec2;

use crate::app::AppState;
use crate::shared::options::SLIDER_PANEL_HEIGHT;

/// Markiert die Anwendung zum kontrollierten Beenden.
pub fn request_exit(state: &mut AppState) {
    log::info!("Beenden angefordert");
    state.should_exit = true;
}

/// Setzt den Depth-Offset auf den Startwert zurück.
pub fn reset_view(state: &mut AppState) {
    state.view.projection.reset();
}

/// Aktualisiert die Viewport-Größe in Projektion und Slider.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.projection.viewport = Vec2::new(size[0], size[1]);
    // Slider-Panel teilt die Breite mit dem Viewport
    state
        .slider
        .set_size(Vec2::new(size[0], SLIDER_PANEL_HEIGHT));
}

/// Wendet eine Scroll-Geste auf den Depth-Offset an.
pub fn apply_depth_scroll(state: &mut AppState, delta_y: f32, shift: bool, alt: bool) {
    state.view.projection.apply_scroll(delta_y, shift, alt);
}
