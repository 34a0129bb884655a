//! Core-Domänentypen: Kurvenpunkte und die geordnete Punktfolge.

/// Einzelner Kurvenpunkt mit Drag- und Selektions-Flags
pub mod point;
pub mod point_store;

pub use point::CurvePoint;
pub use point_store::PointStore;
