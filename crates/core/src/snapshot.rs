//! Status snapshot: what the console and the scoreboard show
//!
//! A plain `Copy` value filled from a session with `snapshot_into`, so the
//! caller can keep one around and refill it every frame.

use crate::types::{Gesture, Player, ROUND_SECONDS};

/// Read-only view of a game session at one instant
///
/// `Default` is the view of a freshly created (or reset) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusSnapshot {
    pub human_score: u32,
    pub machine_score: u32,
    pub human_gesture: Gesture,
    pub machine_gesture: Gesture,
    pub countdown: u32,
    pub game_over: bool,
}

impl StatusSnapshot {
    pub fn clear(&mut self) {
        self.human_score = 0;
        self.machine_score = 0;
        self.human_gesture = Gesture::Unknown;
        self.machine_gesture = Gesture::Unknown;
        self.countdown = ROUND_SECONDS;
        self.game_over = false;
    }

    /// Winner of a finished game; `None` while the game is running
    pub fn winner(&self) -> Option<Player> {
        if !self.game_over {
            return None;
        }
        if self.human_score > self.machine_score {
            Some(Player::Human)
        } else {
            Some(Player::Machine)
        }
    }
}

impl Default for StatusSnapshot {
    fn default() -> Self {
        Self {
            human_score: 0,
            machine_score: 0,
            human_gesture: Gesture::Unknown,
            machine_gesture: Gesture::Unknown,
            countdown: ROUND_SECONDS,
            game_over: false,
        }
    }
}
