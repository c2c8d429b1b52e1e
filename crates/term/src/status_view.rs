//! StatusView: maps a `StatusSnapshot` into terminal lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{sense_human_gesture, StatusSnapshot};
use crate::types::{Contacts, Finger, Outcome};

/// What the console shows about the HTTP side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerStatusView {
    pub enabled: bool,
    pub url: String,
}

/// Text console for the rig.
#[derive(Debug, Clone)]
pub struct StatusView {
    show_legend: bool,
}

impl Default for StatusView {
    fn default() -> Self {
        Self { show_legend: true }
    }
}

impl StatusView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    /// Render the scoreboard, the last round and the contact panel.
    pub fn render(
        &self,
        snap: &StatusSnapshot,
        last_outcome: Option<Outcome>,
        contacts: Contacts,
        server: Option<&ServerStatusView>,
    ) -> Vec<String> {
        let mut lines = Vec::with_capacity(12);

        lines.push("Rock-Paper-Scissors Game".to_string());
        lines.push(String::new());
        lines.push(format!(
            "Human: {} | Robot: {}",
            snap.human_score, snap.machine_score
        ));
        lines.push(format!(
            "Human Gesture: {} | Robot Gesture: {}",
            snap.human_gesture.as_str(),
            snap.machine_gesture.as_str()
        ));

        match snap.winner() {
            Some(winner) => {
                lines.push("Game Over!".to_string());
                lines.push(format!("{} Wins!", winner.label()));
            }
            None => {
                lines.push(format!("Get ready! Gesture in: {}", snap.countdown));
                lines.push(format!("Last round: {}", outcome_text(last_outcome)));
            }
        }

        lines.push(String::new());
        lines.push(contacts_line(contacts));

        if let Some(server) = server {
            if server.enabled {
                lines.push(format!("Scoreboard: {}", server.url));
            } else {
                lines.push("Scoreboard: disabled".to_string());
            }
        }

        if self.show_legend {
            lines.push(String::new());
            lines.push(
                "[t]humb [i]ndex [m]iddle [r]ing [l]ittle  space: release  n: new game  q: quit"
                    .to_string(),
            );
        }

        lines
    }
}

fn outcome_text(outcome: Option<Outcome>) -> &'static str {
    match outcome {
        None => "-",
        Some(Outcome::Draw) => "Draw!",
        Some(Outcome::HumanWins) => "Human Wins!",
        Some(Outcome::MachineWins) => "Robot Wins!",
    }
}

fn contacts_line(contacts: Contacts) -> String {
    let mut s = String::from("Contacts:");
    for finger in Finger::ALL {
        let mark = if contacts.is_touched(finger) { 'x' } else { ' ' };
        s.push_str(&format!(" {}[{}]", finger.as_str(), mark));
    }
    s.push_str(&format!(
        "  reads as: {}",
        sense_human_gesture(contacts).as_str()
    ));
    s
}
