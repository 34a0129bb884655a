//! Abstrakte 2D-Zeichenfläche (Canvas-ähnlicher Zeichenkontext).

use glam::Vec2;

/// RGBA-Farbe mit Komponenten in `[0, 1]`.
pub type Rgba = [f32; 4];

/// Zeichenkontext, gegen den der Spline-Builder zeichnet.
///
/// Pfadbefehle (`move_to`, `line_to`, `quadratic_curve_to`, `bezier_curve_to`,
/// `arc`) sammeln einen Pfad, der mit `stroke` bzw. `fill` ausgegeben wird.
/// `begin_path` verwirft den bisher gesammelten Pfad.
pub trait RenderSurface {
    /// Löscht das Rechteck ab `origin` mit Größe `size`.
    fn clear(&mut self, origin: Vec2, size: Vec2);
    /// Setzt die Linienfarbe für folgende `stroke`-Aufrufe.
    fn set_stroke_style(&mut self, color: Rgba);
    /// Setzt die Füllfarbe für folgende `fill`-Aufrufe.
    fn set_fill_style(&mut self, color: Rgba);
    /// Setzt die Linienstärke für folgende `stroke`-Aufrufe.
    fn set_line_width(&mut self, width: f32);
    /// Beginnt einen neuen, leeren Pfad.
    fn begin_path(&mut self);
    /// Kreisbogen um `center` von `start_angle` bis `end_angle` (Radiant).
    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32);
    /// Startet einen Teilpfad bei `to`.
    fn move_to(&mut self, to: Vec2);
    /// Gerade Linie zum Punkt `to`.
    fn line_to(&mut self, to: Vec2);
    /// Quadratische Bézier-Kurve mit einem Kontrollpunkt.
    fn quadratic_curve_to(&mut self, control: Vec2, to: Vec2);
    /// Kubische Bézier-Kurve mit zwei Kontrollpunkten.
    fn bezier_curve_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2);
    /// Zeichnet die Kontur des aktuellen Pfads.
    fn stroke(&mut self);
    /// Füllt den aktuellen Pfad.
    fn fill(&mut self);
}
