//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::DepthScrolled {
            delta_y,
            shift,
            alt,
        } => vec![AppCommand::ApplyDepthScroll {
            delta_y,
            shift,
            alt,
        }],
        AppIntent::ShapePickRequested { world_pos } => {
            vec![AppCommand::PickShape { world_pos }]
        }
        AppIntent::SliderPointerPressed { pos } => vec![AppCommand::SliderPointerDown { pos }],
        AppIntent::SliderPointerMoved { pos } => vec![AppCommand::SliderPointerMove { pos }],
        AppIntent::SliderPointerReleased { pos } => vec![AppCommand::SliderPointerUp { pos }],
        AppIntent::SliderCurrentChangeRequested { value } => {
            vec![AppCommand::SetSliderCurrent { value }]
        }
        AppIntent::SliderLeftChangeRequested { value } => {
            vec![AppCommand::SetSliderLeft { value }]
        }
        AppIntent::SliderRightChangeRequested { value } => {
            vec![AppCommand::SetSliderRight { value }]
        }
        AppIntent::SliderSelectableToggled => vec![AppCommand::SetSliderSelectable {
            selectable: !state.slider.selectable(),
        }],
        AppIntent::FlickerToggled => vec![AppCommand::ToggleFlicker],
    }
}
