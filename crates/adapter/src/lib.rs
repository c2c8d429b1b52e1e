//! Adapter module - browser scoreboard over HTTP
//!
//! This module lets a browser on the local network follow the game and start
//! a new one. The game loop stays single-threaded: HTTP handlers run on a
//! tokio runtime of their own and talk to the loop through a bounded command
//! channel, each command carrying a oneshot for the answer.
//!
//! # Routes
//!
//! - `GET /`: the scoreboard page (polls `/game-status` every second)
//! - `GET /game-status`: JSON status, see [`protocol::StatusMessage`]
//! - `GET /start-game`: reset the session, answers `Game Started` as text/plain
//! - anything else: 404
//!
//! A full command queue or a stopped loop answers 503 with a JSON
//! [`protocol::ErrorMessage`].
//!
//! # Environment Variables
//!
//! - `RPS_HTTP_HOST`: Bind address (default: "0.0.0.0")
//! - `RPS_HTTP_PORT`: Port number (default: 8080)
//! - `RPS_MAX_PENDING`: Command queue depth (default: 16)
//! - `RPS_HTTP_DISABLED`: Set to "1" or "true" to disable the server entirely
//!
//! # Example Exchange
//!
//! ```text
//! GET /game-status
//! 200 {"humanScore":1,"robotScore":0,"humanGesture":"rock","robotGesture":"scissors","gameOver":false,"countdown":4}
//! GET /start-game
//! 200 Game Started
//! ```

pub mod page;
pub mod protocol;
pub mod runtime;
pub mod server;

pub use rps_rig_core as core;
pub use rps_rig_types as types;

// Re-export protocol types for convenience
pub use protocol::*;
pub use runtime::{Adapter, Handled, InboundCommand};
pub use server::*;
