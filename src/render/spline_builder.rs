//! Spline-Builder: Handle-Berechnung, Pfadaufbau und Redraw der Kurve.
//!
//! Aus der geordneten Punktfolge wird ein zusammenhängender Pfad gebaut:
//! Quadratik vom linken Anker zum ersten Innenpunkt, kubische Bézier-Segmente
//! zwischen den Innenpunkten und eine abschließende Quadratik zum rechten Anker.

use super::surface::{RenderSurface, Rgba};
use crate::core::{CurvePoint, PointStore};
use crate::shared::{control_points, EditorOptions};
use glam::Vec2;
use std::f32::consts::TAU;

/// Darstellungsparameter für einen Redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStyle {
    /// Linienfarbe der Kurve
    pub curve_color: Rgba,
    /// Linienstärke der Kurve
    pub curve_line_width: f32,
    /// Füllfarbe der Punkt-Marker
    pub point_color: Rgba,
    /// Füllfarbe selektierter Punkt-Marker
    pub point_color_selected: Rgba,
    /// Radius der Punkt-Marker
    pub point_radius: f32,
    /// Spannung der Handle-Berechnung
    pub tension: f32,
}

impl CurveStyle {
    /// Übernimmt die Darstellungswerte aus den Editor-Optionen.
    pub fn from_options(options: &EditorOptions) -> Self {
        Self {
            curve_color: options.curve_color,
            curve_line_width: options.curve_line_width,
            point_color: options.point_color,
            point_color_selected: options.point_color_selected,
            point_radius: options.point_radius,
            tension: options.tension,
        }
    }
}

impl Default for CurveStyle {
    fn default() -> Self {
        Self::from_options(&EditorOptions::default())
    }
}

/// Ein Segment des Kurvenpfads, jeweils ab dem Endpunkt des Vorgängers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSegment {
    Line {
        to: Vec2,
    },
    Quadratic {
        control: Vec2,
        to: Vec2,
    },
    Cubic {
        control1: Vec2,
        control2: Vec2,
        to: Vec2,
    },
}

impl PathSegment {
    /// Endpunkt des Segments.
    pub fn end(&self) -> Vec2 {
        match *self {
            PathSegment::Line { to }
            | PathSegment::Quadratic { to, .. }
            | PathSegment::Cubic { to, .. } => to,
        }
    }
}

/// Handle-Paare `(eingehend, ausgehend)` für jeden Innenpunkt.
///
/// Eintrag `k - 1` gehört zu Punkt `k` und wird aus `(k-1, k, k+1)` berechnet.
pub fn control_handles(points: &[Vec2], tension: f32) -> Vec<(Vec2, Vec2)> {
    points
        .windows(3)
        .map(|w| control_points(w[0], w[1], w[2], tension))
        .collect()
}

/// Baut den Pfad durch alle Punkte (Start bei `points[0]`).
///
/// - weniger als 2 Punkte: leerer Pfad
/// - genau 2 Punkte: gerade Linie, ohne Handle-Berechnung
/// - ab 3 Punkten: Quadratik, kubische Segmente, Quadratik
pub fn build_path(points: &[Vec2], tension: f32) -> Vec<PathSegment> {
    let n = points.len();
    match n {
        0 | 1 => Vec::new(),
        2 => vec![PathSegment::Line { to: points[1] }],
        _ => {
            let handles = control_handles(points, tension);
            let mut segments = Vec::with_capacity(n - 1);

            segments.push(PathSegment::Quadratic {
                control: handles[0].0,
                to: points[1],
            });
            for k in 2..n - 1 {
                segments.push(PathSegment::Cubic {
                    control1: handles[k - 2].1,
                    control2: handles[k - 1].0,
                    to: points[k],
                });
            }
            segments.push(PathSegment::Quadratic {
                control: handles[n - 3].1,
                to: points[n - 1],
            });

            segments
        }
    }
}

/// Zeichnet die Kontur der Kurve durch `points`.
pub fn stroke_curve(surface: &mut dyn RenderSurface, points: &[Vec2], style: &CurveStyle) {
    let Some(&start) = points.first() else {
        return;
    };
    let segments = build_path(points, style.tension);
    if segments.is_empty() {
        return;
    }

    surface.begin_path();
    surface.move_to(start);
    for segment in segments {
        match segment {
            PathSegment::Line { to } => surface.line_to(to),
            PathSegment::Quadratic { control, to } => surface.quadratic_curve_to(control, to),
            PathSegment::Cubic {
                control1,
                control2,
                to,
            } => surface.bezier_curve_to(control1, control2, to),
        }
    }
    surface.set_stroke_style(style.curve_color);
    surface.set_line_width(style.curve_line_width);
    surface.stroke();
}

/// Zeichnet gefüllte Kreise für die übergebenen Punkte.
pub fn draw_point_markers(
    surface: &mut dyn RenderSurface,
    points: &[CurvePoint],
    style: &CurveStyle,
) {
    for point in points {
        surface.begin_path();
        surface.arc(point.position, style.point_radius, 0.0, TAU);
        surface.set_fill_style(if point.selected {
            style.point_color_selected
        } else {
            style.point_color
        });
        surface.fill();
    }
}

/// Vollständiger Redraw: Fläche leeren, Kurve zeichnen, Innenpunkte markieren.
///
/// Anker werden nie als Marker gezeichnet.
pub fn redraw(surface: &mut dyn RenderSurface, store: &PointStore, style: &CurveStyle) {
    surface.clear(Vec2::ZERO, store.canvas_size());
    stroke_curve(surface, &store.positions(), style);
    draw_point_markers(surface, store.interior(), style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DisplayList, DrawCommand};
    use approx::assert_relative_eq;

    fn scenario_points() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 100.0),
            Vec2::new(100.0, 50.0),
            Vec2::new(300.0, 60.0),
            Vec2::new(400.0, 100.0),
        ]
    }

    #[test]
    fn fewer_than_two_points_yield_empty_path() {
        assert!(build_path(&[], 0.4).is_empty());
        assert!(build_path(&[Vec2::ONE], 0.4).is_empty());
    }

    #[test]
    fn two_points_yield_straight_line() {
        let path = build_path(&[Vec2::new(0.0, 100.0), Vec2::new(400.0, 100.0)], 0.4);
        assert_eq!(
            path,
            vec![PathSegment::Line {
                to: Vec2::new(400.0, 100.0)
            }]
        );
    }

    #[test]
    fn three_points_yield_two_quadratics_sharing_the_handle_pair() {
        let points = [
            Vec2::new(0.0, 100.0),
            Vec2::new(100.0, 50.0),
            Vec2::new(400.0, 100.0),
        ];
        let (incoming, outgoing) = control_points(points[0], points[1], points[2], 0.4);

        let path = build_path(&points, 0.4);

        assert_eq!(
            path,
            vec![
                PathSegment::Quadratic {
                    control: incoming,
                    to: points[1]
                },
                PathSegment::Quadratic {
                    control: outgoing,
                    to: points[2]
                },
            ]
        );
    }

    #[test]
    fn interior_segments_use_consecutive_handles() {
        let points = scenario_points();
        let handles = control_handles(&points, 0.4);
        assert_eq!(handles.len(), 2);

        let path = build_path(&points, 0.4);

        assert_eq!(path.len(), 3);
        assert_eq!(
            path[1],
            PathSegment::Cubic {
                control1: handles[0].1,
                control2: handles[1].0,
                to: points[2],
            }
        );
        assert_eq!(
            path[2],
            PathSegment::Quadratic {
                control: handles[1].1,
                to: points[3]
            }
        );
    }

    #[test]
    fn path_passes_through_every_point() {
        let points = scenario_points();
        let ends: Vec<Vec2> = build_path(&points, 0.4).iter().map(|s| s.end()).collect();
        assert_eq!(ends, points[1..].to_vec());
    }

    #[test]
    fn first_handle_matches_reference_formula() {
        let points = scenario_points();
        let (incoming, _) = control_handles(&points, 0.4)[0];
        // v = (300, -40); d01 = √12500; d12 = √40100
        let d01 = 12_500f32.sqrt();
        let d12 = 40_100f32.sqrt();
        let k = 0.4 * d01 / (d01 + d12);
        assert_relative_eq!(incoming.x, 100.0 - 300.0 * k, epsilon = 1e-3);
        assert_relative_eq!(incoming.y, 50.0 + 40.0 * k, epsilon = 1e-3);
    }

    #[test]
    fn redraw_of_two_anchors_draws_line_without_markers() {
        let mut store = PointStore::new(7);
        store.initialize(Vec2::new(400.0, 200.0));
        let mut list = DisplayList::new();

        redraw(&mut list, &store, &CurveStyle::default());

        assert_eq!(
            list.commands()[..4],
            [
                DrawCommand::Clear {
                    origin: Vec2::ZERO,
                    size: Vec2::new(400.0, 200.0)
                },
                DrawCommand::BeginPath,
                DrawCommand::MoveTo(Vec2::new(0.0, 100.0)),
                DrawCommand::LineTo(Vec2::new(400.0, 100.0)),
            ]
        );
        assert_eq!(list.count(|c| matches!(c, DrawCommand::Arc { .. })), 0);
        assert_eq!(
            list.count(|c| matches!(c, DrawCommand::QuadraticCurveTo { .. })),
            0
        );
    }

    #[test]
    fn redraw_marks_only_interior_points() {
        let mut store = PointStore::new(7);
        store.initialize(Vec2::new(400.0, 200.0));
        store.insert(Vec2::new(100.0, 50.0), false);
        store.insert(Vec2::new(300.0, 60.0), false);
        let mut list = DisplayList::new();
        let style = CurveStyle::default();

        redraw(&mut list, &store, &style);

        let centers: Vec<Vec2> = list
            .commands()
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Arc { center, radius, .. } => {
                    assert_eq!(*radius, style.point_radius);
                    Some(*center)
                }
                _ => None,
            })
            .collect();
        assert_eq!(
            centers,
            vec![Vec2::new(100.0, 50.0), Vec2::new(300.0, 60.0)]
        );
        assert_eq!(list.count(|c| matches!(c, DrawCommand::Stroke)), 1);
        assert_eq!(list.count(|c| matches!(c, DrawCommand::Fill)), 2);
    }

    #[test]
    fn selected_point_uses_selection_color() {
        let mut store = PointStore::new(7);
        store.initialize(Vec2::new(400.0, 200.0));
        store.insert(Vec2::new(100.0, 50.0), false);
        store.hit_test(Vec2::new(100.0, 50.0), 10.0);
        let style = CurveStyle::default();
        let mut list = DisplayList::new();

        redraw(&mut list, &store, &style);

        assert!(list
            .commands()
            .contains(&DrawCommand::SetFillStyle(style.point_color_selected)));
    }

    #[test]
    fn coincident_points_never_emit_nan() {
        let p = Vec2::new(50.0, 50.0);
        let path = build_path(&[p, p, p, p], 0.4);
        for segment in path {
            match segment {
                PathSegment::Quadratic { control, to } => {
                    assert!(control.is_finite() && to.is_finite())
                }
                PathSegment::Cubic {
                    control1, control2, ..
                } => assert!(control1.is_finite() && control2.is_finite()),
                PathSegment::Line { .. } => {}
            }
        }
    }
}
