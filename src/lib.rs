//! Rock-paper-scissors rig (workspace facade crate).
//!
//! This package exposes `rps_rig::{core,adapter,term,input,types}` while the
//! implementation lives in dedicated crates under `crates/`. The rig-level
//! settings the binary reads live in [`config`]; the per-tick driver work in
//! [`rig`].

pub mod config;
pub mod rig;

pub use rps_rig_adapter as adapter;
pub use rps_rig_core as core;
pub use rps_rig_input as input;
pub use rps_rig_term as term;
pub use rps_rig_types as types;
