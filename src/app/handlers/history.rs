//! Handler für Undo/Redo-Operationen.

use crate::app::AppState;

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut AppState) {
    if state.history.undo(&mut state.points) {
        log::info!(
            "Undo ausgeführt ({}/{})",
            state.history.position(),
            state.history.len()
        );
    } else {
        log::debug!("Undo: nichts zu tun");
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut AppState) {
    if state.history.redo(&mut state.points) {
        log::info!(
            "Redo ausgeführt ({}/{})",
            state.history.position(),
            state.history.len()
        );
    } else {
        log::debug!("Redo: nichts zu tun");
    }
}
