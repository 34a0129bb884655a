//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion und zeichnet
//! danach neu.

pub mod dialog;
pub mod drag;
pub mod editing;
pub mod history;
pub mod view;

use super::{AppState, EditorError};

/// Zeiger-Commands brauchen eine initialisierte Punktfolge.
fn require_initialized(state: &AppState) -> Result<(), EditorError> {
    if state.points.is_initialized() {
        Ok(())
    } else {
        Err(EditorError::NotInitialized)
    }
}
