//! Application State: zentrale Datenhaltung.

use super::history::CurveHistory;
use super::CommandLog;
use crate::core::PointStore;
use crate::render::CurveStyle;
use crate::shared::EditorOptions;

/// Gesamter veränderlicher Zustand des Editors.
///
/// Wird vom Controller explizit an Handler und Spline-Builder übergeben.
pub struct AppState {
    /// Geordnete Punktfolge der Kurve
    pub points: PointStore,
    /// Undo/Redo-Log über die Einfügungen
    pub history: CurveHistory,
    /// Laufzeit-Optionen (Canvas, Farben, Radien, Spannung)
    pub options: EditorOptions,
    /// Log der ausgeführten Commands
    pub command_log: CommandLog,
    /// Optionen-Dialog sichtbar?
    pub show_options_dialog: bool,
    /// Soll die Anwendung beendet werden?
    pub should_exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen neuen Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen neuen Zustand mit den übergebenen Optionen.
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            points: PointStore::new(options.max_points),
            history: CurveHistory::new(),
            options,
            command_log: CommandLog::new(),
            show_options_dialog: false,
            should_exit: false,
        }
    }

    /// Ist Undo möglich? (Steuert den Enabled-Zustand des Buttons)
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Ist Redo möglich?
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Darstellungsparameter für den nächsten Redraw.
    pub fn curve_style(&self) -> CurveStyle {
        CurveStyle::from_options(&self.options)
    }
}
