//! Canvas-Input-Handling: Maus-Events → AppIntent.

use crate::app::AppIntent;

/// Verwaltet den Input-Zustand der Zeichenfläche.
#[derive(Default)]
pub struct InputState {
    /// Letzte gemeldete Zeigerposition (Canvas-Koordinaten)
    last_pointer: Option<glam::Vec2>,
    /// Wurde die Primärtaste auf dem Canvas gedrückt und noch nicht losgelassen?
    pressed_on_canvas: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self {
            last_pointer: None,
            pressed_on_canvas: false,
        }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Positionen werden relativ zur linken oberen Canvas-Ecke geliefert und
    /// auf die Canvas-Fläche begrenzt, damit ein Drag den Canvas nicht verlässt.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let rect = response.rect;

        events.push(AppIntent::CanvasReady {
            size: glam::Vec2::new(rect.width(), rect.height()),
        });

        let (pressed, released, pointer_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.latest_pos(),
            )
        });

        let Some(pointer_pos) = pointer_pos else {
            return events;
        };
        let local = rect.clamp(pointer_pos) - rect.min;
        let pos = glam::Vec2::new(local.x, local.y);

        if pressed && response.hovered() {
            self.pressed_on_canvas = true;
            events.push(AppIntent::PointerPressed { pos });
        }

        if self.last_pointer != Some(pos) && (response.hovered() || self.pressed_on_canvas) {
            events.push(AppIntent::PointerMoved { pos });
        }
        self.last_pointer = Some(pos);

        if released {
            self.pressed_on_canvas = false;
            events.push(AppIntent::PointerReleased { pos });
        }

        events
    }
}
