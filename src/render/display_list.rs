//! Aufzeichnende Zeichenfläche: speichert alle Zeichenbefehle als Liste.
//!
//! Die UI spielt die Liste pro Frame über den egui-Painter ab, Tests
//! prüfen sie direkt.

use super::surface::{RenderSurface, Rgba};
use glam::Vec2;

/// Ein aufgezeichneter Zeichenbefehl.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear { origin: Vec2, size: Vec2 },
    SetStrokeStyle(Rgba),
    SetFillStyle(Rgba),
    SetLineWidth(f32),
    BeginPath,
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadraticCurveTo { control: Vec2, to: Vec2 },
    BezierCurveTo {
        control1: Vec2,
        control2: Vec2,
        to: Vec2,
    },
    Stroke,
    Fill,
}

/// Zeichenfläche, die Befehle aufzeichnet statt sie auszuführen.
///
/// `clear` verwirft alle vorher aufgezeichneten Befehle, sodass die Liste
/// immer genau einen vollständigen Redraw enthält.
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DrawCommand>,
}

impl DisplayList {
    /// Erstellt eine leere Liste.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Alle Befehle seit dem letzten `clear`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Anzahl der aufgezeichneten Befehle.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Gibt `true` zurück, wenn nichts aufgezeichnet ist.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Anzahl der Befehle, auf die `predicate` zutrifft.
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(*c)).count()
    }
}

impl RenderSurface for DisplayList {
    fn clear(&mut self, origin: Vec2, size: Vec2) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { origin, size });
    }

    fn set_stroke_style(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::SetStrokeStyle(color));
    }

    fn set_fill_style(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::SetFillStyle(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn arc(&mut self, center: Vec2, radius: f32, start_angle: f32, end_angle: f32) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn move_to(&mut self, to: Vec2) {
        self.commands.push(DrawCommand::MoveTo(to));
    }

    fn line_to(&mut self, to: Vec2) {
        self.commands.push(DrawCommand::LineTo(to));
    }

    fn quadratic_curve_to(&mut self, control: Vec2, to: Vec2) {
        self.commands
            .push(DrawCommand::QuadraticCurveTo { control, to });
    }

    fn bezier_curve_to(&mut self, control1: Vec2, control2: Vec2, to: Vec2) {
        self.commands.push(DrawCommand::BezierCurveTo {
            control1,
            control2,
            to,
        });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }
}
