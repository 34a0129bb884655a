use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Canvas-Größe ist bekannt (erster Frame oder Größenänderung)
    CanvasReady { size: glam::Vec2 },
    /// Maustaste auf dem Canvas gedrückt (Canvas-Koordinaten)
    PointerPressed { pos: glam::Vec2 },
    /// Mauszeiger auf dem Canvas bewegt
    PointerMoved { pos: glam::Vec2 },
    /// Maustaste losgelassen
    PointerReleased { pos: glam::Vec2 },
    /// Undo: Letzte Einfügung rückgängig machen
    UndoRequested,
    /// Redo: Rückgängig gemachte Einfügung wiederherstellen
    RedoRequested,
    /// Optionen im Dialog geändert
    OptionsChanged { options: Box<EditorOptions> },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Optionen als TOML neben der Binary speichern
    SaveOptionsRequested,
    /// Optionen-Dialog öffnen/schließen
    ToggleOptionsDialogRequested,
    /// Anwendung beenden
    ExitRequested,
}
