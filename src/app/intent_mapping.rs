//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CanvasReady { size } => {
            // Nur beim ersten bekannten Maß oder bei echter Größenänderung neu aufsetzen
            if state.points.is_initialized() && state.points.canvas_size() == size {
                vec![]
            } else {
                vec![AppCommand::InitializeCurve { size }]
            }
        }
        AppIntent::PointerPressed { pos } => vec![AppCommand::PressAt { pos }],
        AppIntent::PointerMoved { pos } => {
            if state.points.any_draggable() {
                vec![AppCommand::DragTo { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::PointerReleased { pos } => {
            if state.points.any_draggable() {
                vec![AppCommand::ReleaseAt { pos }]
            } else {
                vec![]
            }
        }
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ToggleOptionsDialogRequested => vec![AppCommand::ToggleOptionsDialog],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}
