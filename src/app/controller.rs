//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Handler auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Session ===
            AppCommand::RequestExit => handlers::view::request_exit(state),

            // === View & Projektion ===
            AppCommand::ResetView => handlers::view::reset_view(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ApplyDepthScroll {
                delta_y,
                shift,
                alt,
            } => handlers::view::apply_depth_scroll(state, delta_y, shift, alt),

            // === Selektion ===
            AppCommand::PickShape { world_pos } => handlers::selection::pick_shape(state, world_pos),
            AppCommand::ToggleFlicker => handlers::selection::toggle_flicker(state),

            // === Slider ===
            AppCommand::SliderPointerDown { pos } => handlers::slider::pointer_down(state, pos),
            AppCommand::SliderPointerMove { pos } => handlers::slider::pointer_move(state, pos),
            AppCommand::SliderPointerUp { pos } => handlers::slider::pointer_up(state, pos),
            AppCommand::SetSliderCurrent { value } => handlers::slider::set_current(state, value),
            AppCommand::SetSliderLeft { value } => handlers::slider::set_left(state, value),
            AppCommand::SetSliderRight { value } => handlers::slider::set_right(state, value),
            AppCommand::SetSliderSelectable { selectable } => {
                handlers::slider::set_selectable(state, selectable)
            }
        }

        Ok(())
    }
}
