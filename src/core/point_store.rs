//! Geordnete Punktfolge der Kurve mit zwei fixen Ankern.

use super::CurvePoint;
use glam::Vec2;

/// Punktfolge, aufsteigend nach `x` sortiert.
///
/// Index 0 und der letzte Index sind immer die beiden Anker; dazwischen liegen
/// höchstens `capacity - 2` Innenpunkte. Vor `initialize` ist die Folge leer
/// und alle Mutationen sind No-ops.
#[derive(Debug, Clone)]
pub struct PointStore {
    points: Vec<CurvePoint>,
    capacity: usize,
    canvas_size: Vec2,
}

impl PointStore {
    /// Erstellt einen leeren, noch nicht initialisierten Store.
    ///
    /// `capacity` zählt die Anker mit und wird auf mindestens 2 angehoben.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity.max(2)),
            capacity: capacity.max(2),
            canvas_size: Vec2::ZERO,
        }
    }

    /// Setzt die Folge auf die beiden Anker `(0, h/2)` und `(w, h/2)` zurück.
    pub fn initialize(&mut self, canvas_size: Vec2) {
        let mid_y = canvas_size.y / 2.0;
        self.points.clear();
        self.points.push(CurvePoint::anchor(Vec2::new(0.0, mid_y)));
        self.points
            .push(CurvePoint::anchor(Vec2::new(canvas_size.x, mid_y)));
        self.canvas_size = canvas_size;
        log::debug!(
            "Punktfolge initialisiert: {} x {}",
            canvas_size.x,
            canvas_size.y
        );
    }

    /// Wurde `initialize` bereits aufgerufen?
    pub fn is_initialized(&self) -> bool {
        self.points.len() >= 2
    }

    /// Canvas-Größe der letzten Initialisierung.
    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Maximale Punktanzahl inklusive Anker.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Ändert die Kapazität. Bereits vorhandene Punkte bleiben erhalten.
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(2);
    }

    /// Alle Punkte inklusive Anker.
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Positionen aller Punkte inklusive Anker.
    pub fn positions(&self) -> Vec<Vec2> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Nur die Innenpunkte (ohne Anker).
    pub fn interior(&self) -> &[CurvePoint] {
        match self.points.len() {
            0..=2 => &[],
            n => &self.points[1..n - 1],
        }
    }

    /// Anzahl aller Punkte inklusive Anker.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Gibt `true` zurück, solange die Folge nicht initialisiert ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Anzahl der Innenpunkte.
    pub fn interior_len(&self) -> usize {
        self.points.len().saturating_sub(2)
    }

    /// Ist die Kapazitätsgrenze erreicht?
    pub fn is_full(&self) -> bool {
        self.points.len() >= self.capacity
    }

    /// Folgt mindestens ein Punkt dem Mauszeiger?
    pub fn any_draggable(&self) -> bool {
        self.points.iter().any(|p| p.draggable)
    }

    /// Fügt einen Innenpunkt sortiert nach `x` ein.
    ///
    /// Gesucht wird nur unter den Innenpunkten: eingefügt wird vor dem ersten
    /// Innenpunkt mit größerem `x`, sonst direkt vor dem rechten Anker.
    /// Liefert den Einfügeindex; bei voller Folge oder fehlender
    /// Initialisierung passiert nichts.
    pub fn insert(&mut self, position: Vec2, draggable: bool) -> Option<usize> {
        if !self.is_initialized() {
            log::debug!("Einfügen ignoriert: Punktfolge nicht initialisiert");
            return None;
        }
        if self.is_full() {
            log::debug!(
                "Einfügen ignoriert: maximal {} Punkte erlaubt",
                self.capacity
            );
            return None;
        }

        let last = self.points.len() - 1;
        let index = self.points[1..last]
            .iter()
            .position(|p| p.position.x > position.x)
            .map_or(last, |i| i + 1);

        self.points
            .insert(index, CurvePoint::new(position, draggable));
        Some(index)
    }

    /// Index des ersten Innenpunkts, dessen Hitbox `pos` enthält.
    ///
    /// Anker sind fix und werden nie getroffen.
    pub fn find_hit(&self, pos: Vec2, half_width: f32) -> Option<usize> {
        self.interior()
            .iter()
            .position(|p| p.hit_box_contains(pos, half_width))
            .map(|i| i + 1)
    }

    /// Greift den Punkt an `index`: selektiert, ziehbar, auf `pos` gesetzt.
    ///
    /// Alle anderen Punkte verlieren die Selektion.
    pub fn grab(&mut self, index: usize, pos: Vec2) -> bool {
        if !self.is_interior_index(index) {
            return false;
        }
        for (i, point) in self.points.iter_mut().enumerate() {
            point.selected = i == index;
        }
        let point = &mut self.points[index];
        point.draggable = true;
        point.position = pos;
        true
    }

    /// Hit-Test mit sofortigem Greifen des getroffenen Punkts.
    pub fn hit_test(&mut self, pos: Vec2, half_width: f32) -> Option<usize> {
        let index = self.find_hit(pos, half_width)?;
        self.grab(index, pos);
        Some(index)
    }

    /// Verschiebt einen ziehbaren Punkt. No-op für nicht ziehbare Punkte.
    ///
    /// Es wird nicht neu sortiert: ein Punkt darf während des Drags
    /// an seinem Nachbarn vorbeiwandern.
    pub fn update_drag_position(&mut self, index: usize, pos: Vec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) if point.draggable => {
                point.position = pos;
                true
            }
            _ => false,
        }
    }

    /// Beendet den Drag: Position final setzen, Drag-Flag löschen.
    pub fn end_drag(&mut self, index: usize, pos: Vec2) -> bool {
        match self.points.get_mut(index) {
            Some(point) if point.draggable => {
                point.position = pos;
                point.draggable = false;
                true
            }
            _ => false,
        }
    }

    /// Verschiebt alle ziehbaren Punkte auf `pos`. Liefert `true`, falls sich etwas bewegt hat.
    pub fn drag_all_to(&mut self, pos: Vec2) -> bool {
        let mut moved = false;
        for index in 0..self.points.len() {
            moved |= self.update_drag_position(index, pos);
        }
        moved
    }

    /// Beendet alle laufenden Drags an `pos`. Liefert `true`, falls ein Drag aktiv war.
    pub fn release_all(&mut self, pos: Vec2) -> bool {
        let mut released = false;
        for index in 0..self.points.len() {
            released |= self.end_drag(index, pos);
        }
        released
    }

    /// Ersetzt alle Innenpunkte durch `positions` (aufsteigend nach `x` sortiert).
    ///
    /// Die Anker bleiben unverändert, die neuen Punkte sind weder ziehbar noch selektiert.
    pub fn replace_interior(&mut self, positions: impl IntoIterator<Item = Vec2>) {
        if !self.is_initialized() {
            return;
        }
        let first = self.points[0];
        let last = self.points[self.points.len() - 1];

        let mut interior: Vec<CurvePoint> = positions
            .into_iter()
            .map(|p| CurvePoint::new(p, false))
            .collect();
        interior.sort_by(|a, b| a.position.x.total_cmp(&b.position.x));

        self.points.clear();
        self.points.push(first);
        self.points.extend(interior);
        self.points.push(last);
    }

    fn is_interior_index(&self, index: usize) -> bool {
        index > 0 && index + 1 < self.points.len()
    }
}

#[cfg(test)]
mod tests;
