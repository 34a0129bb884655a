//! Spline Curve Editor.
//!
//! Interaktiver Editor für eine glatte Kurve durch vom Benutzer gesetzte
//! Punkte, gezeichnet aus quadratischen und kubischen Bézier-Segmenten.

use eframe::egui;
use spline_curve_editor::{ui, AppController, AppIntent, AppState, DisplayList, EditorOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Spline Curve Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        let window_size = [
            editor_options.canvas_width + 40.0,
            editor_options.canvas_height + 120.0,
        ];
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(window_size)
                .with_title("Spline Curve Editor"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Spline Curve Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new(editor_options)))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    display_list: DisplayList,
    input: ui::InputState,
}

impl EditorApp {
    fn new(editor_options: EditorOptions) -> Self {
        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            display_list: DisplayList::new(),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::CanvasReady { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::collect_keyboard_intents(ctx));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        egui::CentralPanel::default().show(ctx, |ui| {
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(
                    self.state.options.canvas_width,
                    self.state.options.canvas_height,
                ),
                egui::Sense::click_and_drag(),
            );

            events.extend(self.input.collect_canvas_events(ui, &response));

            // Abgespielt wird der Stand des letzten Redraws; Events dieses
            // Frames erscheinen im nächsten.
            ui::paint_display_list(
                &ui.painter_at(rect),
                rect.min,
                self.state.options.canvas_background,
                self.display_list.commands(),
            );
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) =
                self.controller
                    .handle_intent(&mut self.state, &mut self.display_list, event)
            {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.points.any_draggable()
            || self.state.show_options_dialog
        {
            ctx.request_repaint();
        }
    }
}
