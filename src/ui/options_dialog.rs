//! Optionen-Dialog für Canvas, Punkte, Kurve und Farben.

use crate::app::{AppIntent, AppState};

/// Zeigt den Options-Dialog und gibt erzeugte Events zurück.
pub fn show_options_dialog(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    if !state.show_options_dialog {
        return events;
    }

    // Arbeitskopie der Optionen für Live-Bearbeitung
    let mut opts = state.options.clone();
    let mut changed = false;

    egui::Window::new("Optionen")
        .collapsible(true)
        .resizable(true)
        .default_width(320.0)
        .show(ctx, |ui| {
            // ── Canvas ──────────────────────────────────────────
            ui.collapsing("Canvas", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Breite:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.canvas_width)
                                .range(100.0..=4000.0)
                                .speed(1.0),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Höhe:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.canvas_height)
                                .range(100.0..=4000.0)
                                .speed(1.0),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Hintergrund:", &mut opts.canvas_background);
            });

            // ── Punkte ──────────────────────────────────────────
            ui.collapsing("Punkte", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Max. Punkte (inkl. Anker):");
                    changed |= ui
                        .add(egui::DragValue::new(&mut opts.max_points).range(2..=32))
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Radius:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.point_radius)
                                .range(1.0..=20.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Hitbox-Faktor:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.hit_box_factor)
                                .range(1.0..=5.0)
                                .speed(0.05),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Farbe:", &mut opts.point_color);
                changed |= color_edit(ui, "Selektiert:", &mut opts.point_color_selected);
            });

            // ── Kurve ───────────────────────────────────────────
            ui.collapsing("Kurve", |ui| {
                ui.horizontal(|ui| {
                    ui.label("Spannung:");
                    changed |= ui
                        .add(egui::Slider::new(&mut opts.tension, 0.0..=1.0))
                        .changed();
                });
                ui.horizontal(|ui| {
                    ui.label("Linienstärke:");
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut opts.curve_line_width)
                                .range(0.5..=10.0)
                                .speed(0.1),
                        )
                        .changed();
                });
                changed |= color_edit(ui, "Farbe:", &mut opts.curve_color);
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui.button("Schließen").clicked() {
                    events.push(AppIntent::ToggleOptionsDialogRequested);
                }
            });
        });

    // Änderungen sofort anwenden (Live-Preview)
    if changed {
        events.push(AppIntent::OptionsChanged {
            options: Box::new(opts),
        });
    }

    events
}

/// Hilfsfunktion: Farb-Editor für [f32; 4] mit Alpha.
fn color_edit(ui: &mut egui::Ui, label: &str, color: &mut [f32; 4]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        ui.label(label);
        let mut c = super::canvas::to_color32(*color);
        if ui.color_edit_button_srgba(&mut c).changed() {
            color[0] = c.r() as f32 / 255.0;
            color[1] = c.g() as f32 / 255.0;
            color[2] = c.b() as f32 / 255.0;
            color[3] = c.a() as f32 / 255.0;
            changed = true;
        }
    });
    changed
}
