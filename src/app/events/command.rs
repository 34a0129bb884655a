use crate::shared::EditorOptions;

/// Mutierende App-Commands, ausgeführt vom Controller.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Punktfolge auf die beiden Anker zurücksetzen und History leeren
    InitializeCurve { size: glam::Vec2 },
    /// Hit-Test an `pos`; ohne Treffer neuen Punkt einfügen
    PressAt { pos: glam::Vec2 },
    /// Alle ziehbaren Punkte auf `pos` verschieben
    DragTo { pos: glam::Vec2 },
    /// Alle laufenden Drags an `pos` beenden
    ReleaseAt { pos: glam::Vec2 },
    /// Letzte Einfügung rückgängig machen
    Undo,
    /// Rückgängig gemachte Einfügung wiederherstellen
    Redo,
    /// Neue Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
    /// Optionen persistieren
    SaveOptions,
    /// Optionen-Dialog umschalten
    ToggleOptionsDialog,
    /// Anwendung beenden
    RequestExit,
}

impl AppCommand {
    /// Ändert der Command Punktfolge oder Darstellung (→ Redraw nötig)?
    pub fn affects_curve(&self) -> bool {
        !matches!(
            self,
            AppCommand::SaveOptions | AppCommand::ToggleOptionsDialog | AppCommand::RequestExit
        )
    }
}
