use crate::core::{CurvePoint, PointStore};
use glam::Vec2;

/// Snapshot eines eingefügten Innenpunkts zum Zeitpunkt des Einfügens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistoryEntry {
    /// Position beim Einfügen (spätere Drags ändern den Eintrag nicht)
    pub position: Vec2,
    /// Drag-Flag des Punkts beim Einfügen
    pub draggable: bool,
}

impl HistoryEntry {
    /// Erstellt einen Eintrag.
    pub fn new(position: Vec2, draggable: bool) -> Self {
        Self {
            position,
            draggable,
        }
    }
}

impl From<&CurvePoint> for HistoryEntry {
    fn from(point: &CurvePoint) -> Self {
        Self::new(point.position, point.draggable)
    }
}

/// Lineares Undo/Redo-Log über die Einfügungen.
///
/// `position` zählt die aktuell angewendeten Einträge. Nach jedem Aufruf gilt:
/// die Innenpunkte des Stores entsprechen `entries[..position]`, sortiert nach `x`
/// (solange zwischendurch nicht gezogen wurde).
#[derive(Debug, Clone, Default)]
pub struct CurveHistory {
    entries: Vec<HistoryEntry>,
    position: usize,
}

impl CurveHistory {
    /// Erstellt ein leeres Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            position: 0,
        }
    }

    /// Hängt einen Eintrag an und verwirft die rückgängig gemachte Zukunft.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.position);
        self.entries.push(entry);
        self.position = self.entries.len();
        log::debug!("History: {:?}", self.entries);
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.position < self.entries.len()
    }

    /// Anzahl der angewendeten Einträge.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Gesamtzahl der Einträge (angewendet + rückgängig gemacht).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn nichts aufgezeichnet ist.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Verwirft das gesamte Log.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.position = 0;
    }

    /// Nimmt die letzte angewendete Einfügung zurück und baut die Innenpunkte neu auf.
    ///
    /// Der Slice endet bei `position - 1` des Cursors vor dem Schritt, also beim
    /// neuen Cursor. No-op (Rückgabe `false`) bei Cursor 0.
    pub fn undo(&mut self, store: &mut PointStore) -> bool {
        if self.position == 0 {
            return false;
        }
        let end = self.position - 1;
        self.apply_prefix(store, end);
        self.position -= 1;
        true
    }

    /// Wendet die nächste rückgängig gemachte Einfügung erneut an.
    ///
    /// Der Slice endet bei `position + 1` des Cursors vor dem Schritt. No-op
    /// (Rückgabe `false`), wenn der Cursor bereits am Ende steht.
    pub fn redo(&mut self, store: &mut PointStore) -> bool {
        if self.position + 1 > self.entries.len() {
            return false;
        }
        let end = self.position + 1;
        self.apply_prefix(store, end);
        self.position += 1;
        true
    }

    fn apply_prefix(&self, store: &mut PointStore, end: usize) {
        store.replace_interior(self.entries[..end].iter().map(|e| e.position));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> PointStore {
        let mut store = PointStore::new(7);
        store.initialize(Vec2::new(400.0, 200.0));
        store
    }

    fn insert(store: &mut PointStore, history: &mut CurveHistory, x: f32, y: f32) {
        let index = store.insert(Vec2::new(x, y), true).expect("Platz frei");
        history.record(HistoryEntry::from(&store.points()[index]));
    }

    fn interior_positions(store: &PointStore) -> Vec<Vec2> {
        store.interior().iter().map(|p| p.position).collect()
    }

    #[test]
    fn empty_history_cannot_undo_or_redo() {
        let history = CurveHistory::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.position(), 0);
    }

    #[test]
    fn record_moves_cursor_to_end() {
        let mut history = CurveHistory::new();
        history.record(HistoryEntry::new(Vec2::new(1.0, 2.0), true));
        history.record(HistoryEntry::new(Vec2::new(3.0, 4.0), true));
        assert_eq!(history.position(), 2);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn undo_rebuilds_interior_from_applied_prefix() {
        let mut store = store();
        let mut history = CurveHistory::new();
        insert(&mut store, &mut history, 300.0, 60.0);
        insert(&mut store, &mut history, 100.0, 50.0);

        assert!(history.undo(&mut store));

        assert_eq!(history.position(), 1);
        assert_eq!(interior_positions(&store), vec![Vec2::new(300.0, 60.0)]);
    }

    #[test]
    fn redo_restores_sorted_prefix() {
        let mut store = store();
        let mut history = CurveHistory::new();
        insert(&mut store, &mut history, 300.0, 60.0);
        insert(&mut store, &mut history, 100.0, 50.0);
        history.undo(&mut store);
        history.undo(&mut store);
        assert!(store.interior().is_empty());

        assert!(history.redo(&mut store));
        assert!(history.redo(&mut store));

        assert_eq!(
            interior_positions(&store),
            vec![Vec2::new(100.0, 50.0), Vec2::new(300.0, 60.0)]
        );
        assert!(!history.can_redo());
    }

    #[test]
    fn boundary_calls_leave_state_unchanged() {
        let mut store = store();
        let mut history = CurveHistory::new();
        assert!(!history.undo(&mut store));
        assert!(!history.redo(&mut store));

        insert(&mut store, &mut history, 100.0, 50.0);
        let before = store.positions();
        assert!(!history.redo(&mut store));
        assert_eq!(store.positions(), before);
        assert_eq!(history.position(), 1);
    }

    #[test]
    fn record_after_undo_discards_redo_future() {
        let mut store = store();
        let mut history = CurveHistory::new();
        insert(&mut store, &mut history, 100.0, 50.0);
        insert(&mut store, &mut history, 300.0, 60.0);
        history.undo(&mut store);
        assert!(history.can_redo());

        insert(&mut store, &mut history, 200.0, 150.0);

        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[1].position, Vec2::new(200.0, 150.0));
    }

    #[test]
    fn entry_keeps_insertion_flag() {
        let mut store = store();
        let mut history = CurveHistory::new();
        insert(&mut store, &mut history, 100.0, 50.0);
        assert!(history.entries()[0].draggable);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut history = CurveHistory::new();
        history.record(HistoryEntry::new(Vec2::ONE, true));
        history.clear();
        assert!(history.is_empty());
        assert!(!history.can_undo());
    }
}
