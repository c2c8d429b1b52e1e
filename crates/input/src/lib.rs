//! Terminal input module (sensing stand-in).
//!
//! Maps `crossterm` key events into [`PanelAction`]s and keeps a
//! [`ContactPanel`]: five toggled contacts that play the role of the touch
//! glove when the rig runs on a desktop. The panel implements
//! [`ContactSensor`](rps_rig_core::ContactSensor), so the game session reads
//! it exactly like the real contacts.

pub mod map;
pub mod panel;

pub use rps_rig_core as core;
pub use rps_rig_types as types;

pub use map::{handle_key_event, should_quit, PanelAction};
pub use panel::ContactPanel;
