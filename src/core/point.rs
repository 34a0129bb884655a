use glam::Vec2;

/// Ein Punkt der Kurve (Anker oder vom Benutzer gesetzter Innenpunkt).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    /// Position in Canvas-Koordinaten (Pixel, Ursprung oben links)
    pub position: Vec2,
    /// Folgt der Punkt aktuell dem Mauszeiger?
    pub draggable: bool,
    /// Wurde der Punkt zuletzt angeklickt?
    pub selected: bool,
}

impl CurvePoint {
    /// Erstellt einen nicht selektierten Punkt.
    pub fn new(position: Vec2, draggable: bool) -> Self {
        Self {
            position,
            draggable,
            selected: false,
        }
    }

    /// Erstellt einen fixen Endpunkt (nie ziehbar).
    pub fn anchor(position: Vec2) -> Self {
        Self::new(position, false)
    }

    /// Liegt `pos` in der offenen quadratischen Hitbox mit Halbbreite `half_width`?
    pub fn hit_box_contains(&self, pos: Vec2, half_width: f32) -> bool {
        let delta = (pos - self.position).abs();
        delta.x < half_width && delta.y < half_width
    }
}
