//! UI-Layer mit egui: Toolbar, Status-Bar, Optionen-Dialog, Canvas und Input-Handling.
//!
//! Die Kurve wird hier nicht selbst berechnet: der Controller schreibt in
//! eine `DisplayList`, die `paint_display_list` pro Frame abspielt.

mod canvas;
pub mod input;
mod keyboard;
pub mod options_dialog;
pub mod status;
pub mod toolbar;

pub use canvas::paint_display_list;
pub use input::InputState;
pub use keyboard::collect_keyboard_intents;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
