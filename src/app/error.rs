//! Fatale Initialisierungsfehler des Editors.

use thiserror::Error;

/// Fehler, die den Editor nicht weiterarbeiten lassen.
///
/// Alle anderen Randfälle (volle Punktfolge, Undo/Redo am Rand, Drag ohne
/// gegriffenen Punkt) sind No-ops und werden nicht als Fehler gemeldet.
#[derive(Debug, Error, PartialEq)]
pub enum EditorError {
    #[error("Zeichenfläche nicht initialisiert: Canvas-Größe unbekannt")]
    NotInitialized,
    #[error("ungültige Canvas-Größe {width} x {height}")]
    InvalidCanvasSize { width: f32, height: f32 },
}
