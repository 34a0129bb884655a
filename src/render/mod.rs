//! Rendering: abstrakte Zeichenfläche, aufzeichnende Display-List und Spline-Builder.

mod display_list;
pub mod spline_builder;
mod surface;

pub use display_list::{DisplayList, DrawCommand};
pub use spline_builder::{build_path, control_handles, redraw, CurveStyle, PathSegment};
pub use surface::{RenderSurface, Rgba};
