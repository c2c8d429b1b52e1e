//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the round rules, state management, and resolution logic.
//! It has **zero dependencies** on terminals, networking, GPIO, or wall clocks, making it:
//!
//! - **Deterministic**: Same seed produces identical machine gestures
//! - **Testable**: Sensors and actuators are traits, so tests script them
//! - **Portable**: Runs on the board, on a desktop, or headless in CI
//!
//! # Module Structure
//!
//! - [`gesture`]: contact mask to gesture, gesture to servo angles
//! - [`resolve`]: human/machine gesture pair to round outcome
//! - [`clock`]: round countdown and the wall-time to whole-seconds pacer
//! - [`rng`]: LCG and the machine's uniform gesture draw
//! - [`servo`]: servo angle to PWM duty mapping
//! - [`session`]: the game state machine
//! - [`snapshot`]: read-only status view of a session
//!
//! # Game Rules
//!
//! - Every round counts down [`ROUND_SECONDS`](types::ROUND_SECONDS) seconds
//! - At zero the human gesture is read from the contacts and the machine draws one at random
//! - The winner of the round scores one point; draws score nothing
//! - First side to [`WIN_THRESHOLD`](types::WIN_THRESHOLD) points ends the game
//!
//! # Example
//!
//! ```
//! use rps_rig_core::{GameSession, ServoBank};
//! use rps_rig_types::{Contacts, Finger, ROUND_SECONDS};
//!
//! let mut session = GameSession::new(12345);
//! let mut hand = Contacts::from_fingers(&[Finger::Thumb, Finger::Index]); // rock
//! let mut servos = ServoBank::new();
//!
//! let report = session.tick(ROUND_SECONDS, &mut hand, &mut servos).unwrap();
//! assert_eq!(report.round, 1);
//! assert_eq!(session.snapshot().countdown, ROUND_SECONDS);
//! ```
//!
//! # Timing
//!
//! The core never reads a clock. Drivers measure elapsed time, feed it through
//! [`SecondPacer`] and call [`GameSession::tick`](session::GameSession::tick)
//! with the whole seconds that elapsed.

pub mod clock;
pub mod gesture;
pub mod resolve;
pub mod rng;
pub mod servo;
pub mod session;
pub mod snapshot;

pub use rps_rig_types as types;

// Re-export commonly used types for convenience
pub use clock::{RoundClock, SecondPacer};
pub use gesture::{actuate_gesture, sense_human_gesture};
pub use resolve::resolve;
pub use rng::{MachineHand, SimpleRng};
pub use servo::{servo_duty, ServoBank};
pub use session::{
    ContactSensor, GameSession, GestureActuator, Phase, RoundReport, UnknownGesturePolicy,
};
pub use snapshot::StatusSnapshot;
