//! Zentrale Konfiguration für den Spline-Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use super::geometry::DEFAULT_TENSION;

// ── Canvas ──────────────────────────────────────────────────────────

/// Standard-Breite der Zeichenfläche in Pixeln.
pub const CANVAS_WIDTH: f32 = 800.0;
/// Standard-Höhe der Zeichenfläche in Pixeln.
pub const CANVAS_HEIGHT: f32 = 400.0;
/// Hintergrundfarbe der Zeichenfläche (RGBA: Weiß).
pub const CANVAS_BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Punkte ──────────────────────────────────────────────────────────

/// Maximale Punktanzahl inklusive der beiden Anker.
pub const MAX_CURVE_POINTS: usize = 7;
/// Radius der Punkt-Marker in Pixeln.
pub const POINT_RADIUS: f32 = 5.0;
/// Halbe Hitbox-Breite als Vielfaches des Radius.
pub const HIT_BOX_FACTOR: f32 = 2.0;
/// Füllfarbe der Punkt-Marker (RGBA: #335B89).
pub const POINT_COLOR: [f32; 4] = [0.2, 0.357, 0.537, 1.0];
/// Füllfarbe selektierter Punkt-Marker (RGBA: Orange).
pub const POINT_COLOR_SELECTED: [f32; 4] = [0.95, 0.55, 0.1, 1.0];

// ── Kurve ───────────────────────────────────────────────────────────

/// Linienfarbe der Kurve (RGBA: #335B89).
pub const CURVE_COLOR: [f32; 4] = [0.2, 0.357, 0.537, 1.0];
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_LINE_WIDTH: f32 = 1.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `spline_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Breite der Zeichenfläche in Pixeln
    pub canvas_width: f32,
    /// Höhe der Zeichenfläche in Pixeln
    pub canvas_height: f32,
    /// Hintergrundfarbe der Zeichenfläche
    #[serde(default = "default_canvas_background")]
    pub canvas_background: [f32; 4],

    // ── Punkte ──────────────────────────────────────────────────
    /// Maximale Punktanzahl inklusive Anker
    pub max_points: usize,
    /// Radius der Punkt-Marker
    pub point_radius: f32,
    /// Hitbox-Halbbreite als Vielfaches von `point_radius`
    #[serde(default = "default_hit_box_factor")]
    pub hit_box_factor: f32,
    /// Füllfarbe der Punkt-Marker
    pub point_color: [f32; 4],
    /// Füllfarbe selektierter Punkt-Marker
    pub point_color_selected: [f32; 4],

    // ── Kurve ───────────────────────────────────────────────────
    /// Spannung der Handle-Berechnung
    pub tension: f32,
    /// Linienfarbe der Kurve
    pub curve_color: [f32; 4],
    /// Linienstärke der Kurve
    pub curve_line_width: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            canvas_background: CANVAS_BACKGROUND,

            max_points: MAX_CURVE_POINTS,
            point_radius: POINT_RADIUS,
            hit_box_factor: HIT_BOX_FACTOR,
            point_color: POINT_COLOR,
            point_color_selected: POINT_COLOR_SELECTED,

            tension: DEFAULT_TENSION,
            curve_color: CURVE_COLOR,
            curve_line_width: CURVE_LINE_WIDTH,
        }
    }
}

/// Serde-Default für `canvas_background` (Abwärtskompatibilität).
fn default_canvas_background() -> [f32; 4] {
    CANVAS_BACKGROUND
}

/// Serde-Default für `hit_box_factor` (Abwärtskompatibilität).
fn default_hit_box_factor() -> f32 {
    HIT_BOX_FACTOR
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("spline_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("spline_curve_editor.toml")
    }

    /// Halbe Kantenlänge der quadratischen Hitbox um einen Punkt.
    ///
    /// `point_radius * hit_box_factor`
    pub fn hit_half_width(&self) -> f32 {
        self.point_radius * self.hit_box_factor
    }

    /// Canvas-Größe als Vektor.
    pub fn canvas_size(&self) -> glam::Vec2 {
        glam::Vec2::new(self.canvas_width, self.canvas_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_hit_half_width_is_twice_the_radius() {
        let opts = EditorOptions::default();
        assert_eq!(opts.hit_half_width(), 2.0 * POINT_RADIUS);
    }

    #[test]
    fn toml_roundtrip_keeps_values() {
        let opts = EditorOptions {
            max_points: 5,
            tension: 0.25,
            ..EditorOptions::default()
        };
        let text = toml::to_string_pretty(&opts).expect("serialisierbar");
        let parsed: EditorOptions = toml::from_str(&text).expect("parsebar");
        assert_eq!(parsed, opts);
    }

    #[test]
    fn missing_optional_fields_fall_back_to_defaults() {
        let text = r#"
            canvas_width = 640.0
            canvas_height = 320.0
            max_points = 7
            point_radius = 5.0
            point_color = [0.2, 0.357, 0.537, 1.0]
            point_color_selected = [0.95, 0.55, 0.1, 1.0]
            tension = 0.4
            curve_color = [0.2, 0.357, 0.537, 1.0]
            curve_line_width = 1.0
        "#;
        let parsed: EditorOptions = toml::from_str(text).expect("parsebar");
        assert_eq!(parsed.canvas_width, 640.0);
        assert_eq!(parsed.hit_box_factor, HIT_BOX_FACTOR);
        assert_eq!(parsed.canvas_background, CANVAS_BACKGROUND);
    }

    #[test]
    fn unreadable_file_yields_defaults() {
        let opts = EditorOptions::load_from_file(std::path::Path::new(
            "/nonexistent/spline_curve_editor.toml",
        ));
        assert_eq!(opts, EditorOptions::default());
    }
}
