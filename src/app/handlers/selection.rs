//! Handler für Selektions-Operationen.

use glam::Vec2;

use crate::app::AppState;

/// Selektiert die erste Form unter dem Weltpunkt.
///
/// Ein Fehlschlag lässt die bestehende Selektion unverändert
/// (siehe `Scene::pick`).
pub fn pick_shape(state: &mut AppState, world_pos: Vec2) {
    match state.scene.pick(world_pos) {
        Some(index) => {
            let label = state.scene.shapes[index].label.clone();
            log::debug!("Form {} selektiert bei {:?}", index, world_pos);
            state.ui.status_message = Some(format!("Selected: {label}"));
        }
        None => {
            log::debug!("Kein Treffer bei {:?}", world_pos);
        }
    }
}

/// Schaltet den blinkenden Selektionsrahmen für alle Formen um.
pub fn toggle_flicker(state: &mut AppState) {
    state.options.flicker_selection = !state.options.flicker_selection;
    for instance in &mut state.scene.shapes {
        instance.flicker = state.options.flicker_selection;
    }
}
