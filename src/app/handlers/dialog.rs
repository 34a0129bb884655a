//! Handler für Optionen-Dialog und Anwendungssteuerung.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen. Die Kapazität gilt ab der nächsten Einfügung.
pub fn apply_options(state: &mut AppState, options: EditorOptions) {
    state.points.set_capacity(options.max_points);
    state.options = options;
    log::info!("Optionen übernommen");
}

/// Setzt Optionen auf Standardwerte zurück (ohne zu speichern).
pub fn reset_options(state: &mut AppState) {
    apply_options(state, EditorOptions::default());
}

/// Persistiert die aktuellen Optionen neben der Binary.
pub fn save_options(state: &AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)
}

/// Blendet den Optionen-Dialog ein oder aus.
pub fn toggle_options_dialog(state: &mut AppState) {
    state.show_options_dialog = !state.show_options_dialog;
}

/// Markiert die Anwendung zum Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
    log::info!("Beenden angefordert");
}
