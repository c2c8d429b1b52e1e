//! Terminal status module.
//!
//! A one-screen console for the rig: the scoreboard text, the contact panel
//! and the key legend. The view is pure (snapshot in, lines out); the renderer
//! owns raw mode and the alternate screen.

pub mod renderer;
pub mod status_view;

pub use rps_rig_core as core;
pub use rps_rig_types as types;

pub use renderer::{encode_lines_into, TerminalRenderer};
pub use status_view::{ServerStatusView, StatusView};
