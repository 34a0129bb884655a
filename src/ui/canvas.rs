//! Zeichenfläche: spielt die aufgezeichnete Display-List über den egui-Painter ab.

use crate::render::{DrawCommand, Rgba};
use std::f32::consts::TAU;

/// Segmente pro vollem Kreis beim Abtasten von Teilbögen.
const ARC_SEGMENTS_PER_TURN: f32 = 48.0;

/// Wandelt eine RGBA-Farbe ([0, 1]) in eine egui-Farbe.
pub(crate) fn to_color32(color: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(
        (color[0].clamp(0.0, 1.0) * 255.0) as u8,
        (color[1].clamp(0.0, 1.0) * 255.0) as u8,
        (color[2].clamp(0.0, 1.0) * 255.0) as u8,
        (color[3].clamp(0.0, 1.0) * 255.0) as u8,
    )
}

/// Ein Stück des aktuell gesammelten Pfads in Screen-Koordinaten.
#[derive(Debug, Clone)]
enum PathPiece {
    Line([egui::Pos2; 2]),
    Quadratic([egui::Pos2; 3]),
    Cubic([egui::Pos2; 4]),
    Circle { center: egui::Pos2, radius: f32 },
    Polyline(Vec<egui::Pos2>),
}

/// Abspiel-Zustand (entspricht dem Zustand eines Canvas-Zeichenkontexts).
struct Playback<'a> {
    painter: &'a egui::Painter,
    origin: egui::Pos2,
    background: egui::Color32,
    stroke_color: egui::Color32,
    fill_color: egui::Color32,
    line_width: f32,
    cursor: Option<egui::Pos2>,
    pieces: Vec<PathPiece>,
}

impl Playback<'_> {
    fn to_screen(&self, p: glam::Vec2) -> egui::Pos2 {
        self.origin + egui::vec2(p.x, p.y)
    }

    fn push_line_from_cursor(&mut self, to: egui::Pos2) {
        if let Some(from) = self.cursor {
            self.pieces.push(PathPiece::Line([from, to]));
        }
    }

    fn apply(&mut self, command: &DrawCommand) {
        match *command {
            DrawCommand::Clear { origin, size } => {
                let rect = egui::Rect::from_min_size(
                    self.to_screen(origin),
                    egui::vec2(size.x, size.y),
                );
                self.painter.rect_filled(rect, 0.0, self.background);
            }
            DrawCommand::SetStrokeStyle(color) => self.stroke_color = to_color32(color),
            DrawCommand::SetFillStyle(color) => self.fill_color = to_color32(color),
            DrawCommand::SetLineWidth(width) => self.line_width = width,
            DrawCommand::BeginPath => {
                self.pieces.clear();
                self.cursor = None;
            }
            DrawCommand::MoveTo(to) => self.cursor = Some(self.to_screen(to)),
            DrawCommand::LineTo(to) => {
                let to = self.to_screen(to);
                self.push_line_from_cursor(to);
                self.cursor = Some(to);
            }
            DrawCommand::QuadraticCurveTo { control, to } => {
                let control = self.to_screen(control);
                let to = self.to_screen(to);
                let from = self.cursor.unwrap_or(control);
                self.pieces.push(PathPiece::Quadratic([from, control, to]));
                self.cursor = Some(to);
            }
            DrawCommand::BezierCurveTo {
                control1,
                control2,
                to,
            } => {
                let control1 = self.to_screen(control1);
                let control2 = self.to_screen(control2);
                let to = self.to_screen(to);
                let from = self.cursor.unwrap_or(control1);
                self.pieces
                    .push(PathPiece::Cubic([from, control1, control2, to]));
                self.cursor = Some(to);
            }
            DrawCommand::Arc {
                center,
                radius,
                start_angle,
                end_angle,
            } => self.push_arc(self.to_screen(center), radius, start_angle, end_angle),
            DrawCommand::Stroke => self.stroke(),
            DrawCommand::Fill => self.fill(),
        }
    }

    fn push_arc(&mut self, center: egui::Pos2, radius: f32, start: f32, end: f32) {
        let sweep = end - start;
        let point_at = |angle: f32| center + radius * egui::vec2(angle.cos(), angle.sin());

        self.push_line_from_cursor(point_at(start));
        if sweep.abs() >= TAU - f32::EPSILON {
            self.pieces.push(PathPiece::Circle { center, radius });
        } else {
            let steps = ((sweep.abs() / TAU) * ARC_SEGMENTS_PER_TURN).ceil().max(1.0) as usize;
            let points = (0..=steps)
                .map(|i| point_at(start + sweep * i as f32 / steps as f32))
                .collect();
            self.pieces.push(PathPiece::Polyline(points));
        }
        self.cursor = Some(point_at(end));
    }

    fn stroke(&self) {
        let stroke = egui::Stroke::new(self.line_width, self.stroke_color);
        for piece in &self.pieces {
            match piece {
                PathPiece::Line(points) => {
                    self.painter.line_segment(*points, stroke);
                }
                PathPiece::Quadratic(points) => {
                    self.painter
                        .add(egui::epaint::QuadraticBezierShape::from_points_stroke(
                            *points,
                            false,
                            egui::Color32::TRANSPARENT,
                            stroke,
                        ));
                }
                PathPiece::Cubic(points) => {
                    self.painter
                        .add(egui::epaint::CubicBezierShape::from_points_stroke(
                            *points,
                            false,
                            egui::Color32::TRANSPARENT,
                            stroke,
                        ));
                }
                PathPiece::Circle { center, radius } => {
                    self.painter.circle_stroke(*center, *radius, stroke);
                }
                PathPiece::Polyline(points) => {
                    self.painter
                        .add(egui::Shape::line(points.clone(), stroke));
                }
            }
        }
    }

    fn fill(&self) {
        for piece in &self.pieces {
            match piece {
                PathPiece::Circle { center, radius } => {
                    self.painter.circle_filled(*center, *radius, self.fill_color);
                }
                PathPiece::Polyline(points) if points.len() >= 3 => {
                    self.painter.add(egui::Shape::convex_polygon(
                        points.clone(),
                        self.fill_color,
                        egui::Stroke::NONE,
                    ));
                }
                PathPiece::Quadratic(points) => {
                    self.painter
                        .add(egui::epaint::QuadraticBezierShape::from_points_stroke(
                            *points,
                            true,
                            self.fill_color,
                            egui::Stroke::NONE,
                        ));
                }
                PathPiece::Cubic(points) => {
                    self.painter
                        .add(egui::epaint::CubicBezierShape::from_points_stroke(
                            *points,
                            true,
                            self.fill_color,
                            egui::Stroke::NONE,
                        ));
                }
                // Linien und zu kurze Bögen haben keine Fläche
                PathPiece::Line(_) | PathPiece::Polyline(_) => {}
            }
        }
    }
}

/// Spielt `commands` mit `origin` als Canvas-Ursprung über `painter` ab.
pub fn paint_display_list(
    painter: &egui::Painter,
    origin: egui::Pos2,
    background: Rgba,
    commands: &[DrawCommand],
) {
    let mut playback = Playback {
        painter,
        origin,
        background: to_color32(background),
        stroke_color: egui::Color32::BLACK,
        fill_color: egui::Color32::BLACK,
        line_width: 1.0,
        cursor: None,
        pieces: Vec::new(),
    };
    for command in commands {
        playback.apply(command);
    }
}
