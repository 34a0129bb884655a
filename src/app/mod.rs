//! Application-Layer: Controller, State, Events, History und Handler.

pub mod command_log;
pub mod controller;
mod error;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Application State
///
/// Hält Punktfolge, History und Optionen als expliziten, übergebenen Zustand.
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use error::EditorError;
pub use events::{AppCommand, AppIntent};
pub use history::{CurveHistory, HistoryEntry};
pub use state::AppState;
