//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "Punkte: {} / {}",
                state.points.interior_len(),
                state.points.capacity().saturating_sub(2)
            ));

            ui.separator();

            ui.label(format!(
                "History: {} / {}",
                state.history.position(),
                state.history.len()
            ));

            if let Some(point) = state.points.interior().iter().find(|p| p.selected) {
                ui.separator();
                ui.label(format!(
                    "Selektiert: ({:.1}, {:.1})",
                    point.position.x, point.position.y
                ));
            }

            if state.points.any_draggable() {
                ui.separator();
                ui.label("Drag aktiv");
            }
        });
    });
}
