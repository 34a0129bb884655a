//! Handler für Mausklicks: Punkt greifen oder neuen Punkt einfügen.

use super::require_initialized;
use crate::app::history::HistoryEntry;
use crate::app::AppState;
use glam::Vec2;

/// Hit-Test an `pos`; trifft er nichts, wird ein neuer ziehbarer Punkt eingefügt
/// und in der History aufgezeichnet.
pub fn press(state: &mut AppState, pos: Vec2) -> anyhow::Result<()> {
    require_initialized(state)?;

    let half_width = state.options.hit_half_width();
    if let Some(index) = state.points.hit_test(pos, half_width) {
        log::debug!("Punkt {} gegriffen bei ({:.1}, {:.1})", index, pos.x, pos.y);
        return Ok(());
    }

    match state.points.insert(pos, true) {
        Some(index) => {
            let entry = HistoryEntry::from(&state.points.points()[index]);
            state.history.record(entry);
            log::info!(
                "Punkt eingefügt bei ({:.1}, {:.1}), Index {}, {} Innenpunkte",
                pos.x,
                pos.y,
                index,
                state.points.interior_len()
            );
        }
        None => log::debug!(
            "Kein Punkt eingefügt: Grenze von {} Punkten erreicht",
            state.points.capacity()
        ),
    }
    Ok(())
}
