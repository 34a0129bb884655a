//! Reine Geometrie-Funktionen für die Spline-Konstruktion.
//!
//! Layer-neutral: wird von `render::spline_builder` und den Tests genutzt,
//! ohne Abhängigkeit zu `app` oder `ui`.

use glam::Vec2;

/// Standard-Spannung für die Handle-Berechnung (Anteil der Sehne p0→p2).
pub const DEFAULT_TENSION: f32 = 0.4;

/// Euklidischer Abstand zwischen zwei Punkten.
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Verschiebungsvektor von `a` nach `b`.
pub fn vector(a: Vec2, b: Vec2) -> Vec2 {
    b - a
}

/// Berechnet die beiden Bézier-Handles um `p1` aus dem Tripel `p0, p1, p2`.
///
/// Beide Handles liegen parallel zur Sehne `p0 → p2`. Ihre Länge wird im
/// Verhältnis der Segmentlängen `d01 : d12` aufgeteilt und mit `tension`
/// skaliert (lokal glatt, Catmull-Rom-ähnlich, ohne globales Gleichungssystem).
///
/// Rückgabe: `(eingehendes Handle, ausgehendes Handle)`.
///
/// Fallen alle drei Punkte zusammen (`d01 + d12 == 0`), kollabieren beide
/// Handles auf `p1`, statt NaN zu liefern.
pub fn control_points(p0: Vec2, p1: Vec2, p2: Vec2, tension: f32) -> (Vec2, Vec2) {
    let chord = vector(p0, p2);
    let d01 = distance(p0, p1);
    let d12 = distance(p1, p2);
    let d012 = d01 + d12;

    if d012 <= f32::EPSILON {
        return (p1, p1);
    }

    let incoming = p1 - chord * tension * d01 / d012;
    let outgoing = p1 + chord * tension * d12 / d012;
    (incoming, outgoing)
}
