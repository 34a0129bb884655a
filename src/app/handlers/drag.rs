//! Handler für Drag-Bewegung und Drag-Ende.

use super::require_initialized;
use crate::app::AppState;
use glam::Vec2;

/// Verschiebt alle ziehbaren Punkte auf `pos`. Die History bleibt unberührt.
pub fn drag_to(state: &mut AppState, pos: Vec2) -> anyhow::Result<()> {
    require_initialized(state)?;
    if !state.points.drag_all_to(pos) {
        log::debug!("Drag: kein ziehbarer Punkt");
    }
    Ok(())
}

/// Setzt alle ziehbaren Punkte final auf `pos` und beendet den Drag.
pub fn release_at(state: &mut AppState, pos: Vec2) -> anyhow::Result<()> {
    require_initialized(state)?;
    if state.points.release_all(pos) {
        log::debug!("Drag beendet bei ({:.1}, {:.1})", pos.x, pos.y);
    }
    Ok(())
}
