//! Handler für Slider-Interaktion und programmatische Wertänderung.

use glam::Vec2;

use crate::app::AppState;

/// Pointer-Down auf der Slider-Fläche (startet ggf. einen Drag).
pub fn pointer_down(state: &mut AppState, pos: Vec2) {
    state.slider.on_pointer_down(pos);
}

/// Pointer-Move auf der Slider-Fläche (Drag oder Hover).
pub fn pointer_move(state: &mut AppState, pos: Vec2) {
    state.slider.on_pointer_move(pos);
}

/// Pointer-Up auf der Slider-Fläche (beendet den Drag).
pub fn pointer_up(state: &mut AppState, pos: Vec2) {
    state.slider.on_pointer_up(pos);
}

/// Setzt `current` programmatisch (feuert keine Change-Listener).
pub fn set_current(state: &mut AppState, value: f32) {
    if state.slider.set_current(value) {
        log::debug!("Slider current = {}", state.slider.current());
    }
}

/// Setzt `left` programmatisch (feuert keine Change-Listener).
pub fn set_left(state: &mut AppState, value: f32) {
    if state.slider.set_left(value) {
        log::debug!("Slider left = {}", state.slider.left());
    }
}

/// Setzt `right` programmatisch (feuert keine Change-Listener).
pub fn set_right(state: &mut AppState, value: f32) {
    if state.slider.set_right(value) {
        log::debug!("Slider right = {}", state.slider.right());
    }
}

/// Schaltet Hit-Tests und Drags des Sliders um.
pub fn set_selectable(state: &mut AppState, selectable: bool) {
    state.slider.set_selectable(selectable);
}
