//! Toolbar mit Undo/Redo und Optionen.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
///
/// Undo/Redo sind deaktiviert, solange der History-Cursor am Rand steht.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui
                .add_enabled(state.can_undo(), egui::Button::new("Undo"))
                .on_hover_text("Strg+Z")
                .clicked()
            {
                events.push(AppIntent::UndoRequested);
            }
            if ui
                .add_enabled(state.can_redo(), egui::Button::new("Redo"))
                .on_hover_text("Strg+Y")
                .clicked()
            {
                events.push(AppIntent::RedoRequested);
            }

            ui.separator();

            if ui
                .add(egui::Button::new("Optionen").selected(state.show_options_dialog))
                .clicked()
            {
                events.push(AppIntent::ToggleOptionsDialogRequested);
            }
            if ui.button("Beenden").clicked() {
                events.push(AppIntent::ExitRequested);
            }
        });
    });

    events
}
