//! Handler für Canvas-Initialisierung.

use crate::app::{AppState, EditorError};
use glam::Vec2;

/// Setzt die Punktfolge auf die beiden Anker für `size` zurück und leert die History.
pub fn initialize_curve(state: &mut AppState, size: Vec2) -> anyhow::Result<()> {
    if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
        return Err(EditorError::InvalidCanvasSize {
            width: size.x,
            height: size.y,
        }
        .into());
    }

    state.points.set_capacity(state.options.max_points);
    state.points.initialize(size);
    state.history.clear();
    log::info!("Canvas initialisiert: {} x {}", size.x, size.y);
    Ok(())
}
