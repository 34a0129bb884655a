//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Geometrie und Optionen, die von `core`, `app`, `render` und `ui`
//! gemeinsam genutzt werden, ohne direkte Abhängigkeiten zu erzeugen.

pub mod geometry;
pub mod options;

pub use geometry::{control_points, distance, vector, DEFAULT_TENSION};
pub use options::EditorOptions;
pub use options::{MAX_CURVE_POINTS, POINT_RADIUS};
