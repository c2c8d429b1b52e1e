//! Protocol module - JSON bodies served by the HTTP adapter
//!
//! The scoreboard page reads `/game-status`, whose body is exactly:
//!
//! ```text
//! {"humanScore":0,"robotScore":0,"humanGesture":"unknown","robotGesture":"unknown","gameOver":false,"countdown":5}
//! ```

use serde::{Deserialize, Serialize};

use crate::core::StatusSnapshot;
use crate::types::Gesture;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureLower {
    Rock,
    Paper,
    Scissors,
    Unknown,
}

impl From<Gesture> for GestureLower {
    fn from(value: Gesture) -> Self {
        match value {
            Gesture::Rock => Self::Rock,
            Gesture::Paper => Self::Paper,
            Gesture::Scissors => Self::Scissors,
            Gesture::Unknown => Self::Unknown,
        }
    }
}

impl From<GestureLower> for Gesture {
    fn from(value: GestureLower) -> Self {
        match value {
            GestureLower::Rock => Self::Rock,
            GestureLower::Paper => Self::Paper,
            GestureLower::Scissors => Self::Scissors,
            GestureLower::Unknown => Self::Unknown,
        }
    }
}

/// Body of `GET /game-status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMessage {
    pub human_score: u32,
    pub robot_score: u32,
    pub human_gesture: GestureLower,
    pub robot_gesture: GestureLower,
    pub game_over: bool,
    pub countdown: u32,
}

impl From<&StatusSnapshot> for StatusMessage {
    fn from(snap: &StatusSnapshot) -> Self {
        Self {
            human_score: snap.human_score,
            robot_score: snap.machine_score,
            human_gesture: snap.human_gesture.into(),
            robot_gesture: snap.machine_gesture.into(),
            game_over: snap.game_over,
            countdown: snap.countdown,
        }
    }
}

impl From<StatusMessage> for StatusSnapshot {
    fn from(msg: StatusMessage) -> Self {
        Self {
            human_score: msg.human_score,
            machine_score: msg.robot_score,
            human_gesture: msg.human_gesture.into(),
            machine_gesture: msg.robot_gesture.into(),
            countdown: msg.countdown,
            game_over: msg.game_over,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Backpressure,
    Unavailable,
    Timeout,
}

/// Body of a failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub error: ErrorCode,
    pub message: String,
}

pub fn create_error(code: ErrorCode, message: &str) -> ErrorMessage {
    ErrorMessage {
        error: code,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_field_names() {
        let msg = StatusMessage::from(&StatusSnapshot::default());
        let v = serde_json::to_value(msg).unwrap();
        let obj = v.as_object().unwrap();

        let mut keys: Vec<&str> = obj.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "countdown",
                "gameOver",
                "humanGesture",
                "humanScore",
                "robotGesture",
                "robotScore"
            ]
        );
        assert_eq!(v["humanGesture"], "unknown");
        assert_eq!(v["countdown"], 5);
        assert_eq!(v["gameOver"], false);
    }

    #[test]
    fn test_status_message_maps_machine_to_robot() {
        let snap = StatusSnapshot {
            human_score: 1,
            machine_score: 2,
            human_gesture: Gesture::Paper,
            machine_gesture: Gesture::Scissors,
            countdown: 4,
            game_over: false,
        };
        let v = serde_json::to_value(StatusMessage::from(&snap)).unwrap();
        assert_eq!(v["robotScore"], 2);
        assert_eq!(v["robotGesture"], "scissors");
        assert_eq!(v["humanGesture"], "paper");
    }

    #[test]
    fn test_parse_status_body() {
        let body = r#"{"humanScore":3,"robotScore":1,"humanGesture":"rock","robotGesture":"scissors","gameOver":true,"countdown":0}"#;
        let msg: StatusMessage = serde_json::from_str(body).unwrap();
        let snap = StatusSnapshot::from(msg);
        assert!(snap.game_over);
        assert_eq!(snap.human_gesture, Gesture::Rock);
    }

    #[test]
    fn test_error_body() {
        let err = create_error(ErrorCode::Backpressure, "Command queue is full");
        let v = serde_json::to_value(&err).unwrap();
        assert_eq!(v["error"], "backpressure");
        assert_eq!(v["message"], "Command queue is full");
    }
}
