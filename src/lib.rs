//! Spline Curve Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, CommandLog, CurveHistory, EditorError,
    HistoryEntry,
};
pub use core::{CurvePoint, PointStore};
pub use render::{CurveStyle, DisplayList, DrawCommand, PathSegment, RenderSurface};
pub use shared::EditorOptions;
