//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};
use crate::render::{spline_builder, RenderSurface};

/// Orchestriert UI-Events und Handler auf den AppState.
///
/// Nach jedem kurvenrelevanten Command wird die Kurve vollständig neu
/// gezeichnet, erst nachdem der Handler den Zustand fertig mutiert hat.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AppState,
        surface: &mut dyn RenderSurface,
        intent: AppIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, surface, command)?;
        }

        Ok(())
    }

    /// Führt einen mutierenden Command aus und zeichnet danach neu.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        surface: &mut dyn RenderSurface,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        let redraw = command.affects_curve();
        match command {
            // === Canvas ===
            AppCommand::InitializeCurve { size } => handlers::view::initialize_curve(state, size)?,

            // === Zeiger ===
            AppCommand::PressAt { pos } => handlers::editing::press(state, pos)?,
            AppCommand::DragTo { pos } => handlers::drag::drag_to(state, pos)?,
            AppCommand::ReleaseAt { pos } => handlers::drag::release_at(state, pos)?,

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Dialoge & Anwendungssteuerung ===
            AppCommand::ApplyOptions { options } => handlers::dialog::apply_options(state, *options),
            AppCommand::ResetOptions => handlers::dialog::reset_options(state),
            AppCommand::SaveOptions => handlers::dialog::save_options(state)?,
            AppCommand::ToggleOptionsDialog => handlers::dialog::toggle_options_dialog(state),
            AppCommand::RequestExit => handlers::dialog::request_exit(state),
        }

        if redraw {
            self.redraw(state, surface);
        }
        Ok(())
    }

    /// Zeichnet die Kurve aus dem aktuellen Zustand neu.
    ///
    /// Ohne initialisierte Punktfolge bleibt die Fläche unverändert.
    pub fn redraw(&self, state: &AppState, surface: &mut dyn RenderSurface) {
        if !state.points.is_initialized() {
            return;
        }
        spline_builder::redraw(surface, &state.points, &state.curve_style());
    }
}
