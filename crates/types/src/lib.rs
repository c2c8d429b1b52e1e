//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the rig.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, HTTP protocol).
//!
//! # Round Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROUND_SECONDS` | 5 | Countdown before each gesture capture |
//! | `WIN_THRESHOLD` | 3 | Points needed to finish the game |
//! | `TICK_MS` | 50 | Driver loop cadence |
//! | `STATUS_POLL_MS` | 1000 | Scoreboard page polling interval |
//!
//! # Servo PWM
//!
//! The gesture arms are hobby servos driven at `PWM_FREQUENCY_HZ` (50 Hz) with
//! `PWM_RESOLUTION_BITS` (16) of duty resolution. An angle of 0° maps to a
//! 0.5ms pulse (`SERVO_MIN_DUTY`) and 180° to a 2.5ms pulse (`SERVO_MAX_DUTY`).
//!
//! # Contact Mask
//!
//! Touch contacts are packed into the low five bits of a `u8`:
//!
//! | Bit | Finger |
//! |-----|--------|
//! | 0 | Thumb |
//! | 1 | Index |
//! | 2 | Middle |
//! | 3 | Ring |
//! | 4 | Little |
//!
//! # Examples
//!
//! ```
//! use rps_rig_types::{Contacts, Finger, Gesture, ROUND_SECONDS, WIN_THRESHOLD};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Gesture::from_str("Rock"), Some(Gesture::Rock));
//! assert_eq!(Gesture::Scissors.as_str(), "scissors");
//!
//! // Contacts from a raw mask
//! let contacts = Contacts::from_bits(0b11001);
//! assert!(contacts.is_touched(Finger::Thumb));
//! assert!(!contacts.is_touched(Finger::Index));
//!
//! assert_eq!(ROUND_SECONDS, 5);
//! assert_eq!(WIN_THRESHOLD, 3);
//! ```

/// Countdown length of one round, in whole seconds
pub const ROUND_SECONDS: u32 = 5;

/// Points a side needs to win the game
pub const WIN_THRESHOLD: u32 = 3;

/// Driver loop cadence in milliseconds
pub const TICK_MS: u32 = 50;

/// How often the scoreboard page polls `/game-status`
pub const STATUS_POLL_MS: u32 = 1000;

/// Number of gesture arms on the machine side
pub const SERVO_COUNT: usize = 3;

/// Largest servo angle in degrees
pub const SERVO_MAX_ANGLE: u8 = 180;

/// Servo PWM frequency (50 Hz, 20ms period)
pub const PWM_FREQUENCY_HZ: u32 = 50;

/// Servo PWM resolution in bits
pub const PWM_RESOLUTION_BITS: u8 = 16;

/// Duty value that holds the output high for `pulse_us` microseconds of each
/// PWM period, truncated
pub const fn pulse_duty(pulse_us: u32) -> u32 {
    let full_scale = 1u64 << PWM_RESOLUTION_BITS;
    (pulse_us as u64 * PWM_FREQUENCY_HZ as u64 * full_scale / 1_000_000) as u32
}

/// Pulse width that drives a servo to 0°
pub const SERVO_MIN_PULSE_US: u32 = 500;

/// Pulse width that drives a servo to 180°
pub const SERVO_MAX_PULSE_US: u32 = 2500;

/// Duty value for 0°
pub const SERVO_MIN_DUTY: u32 = pulse_duty(SERVO_MIN_PULSE_US);

/// Duty value for 180°
pub const SERVO_MAX_DUTY: u32 = pulse_duty(SERVO_MAX_PULSE_US);


/// The hand shapes a player can show
///
/// `Unknown` is a real value, not an error: it is what an ambiguous
/// hand pose reads as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    #[default]
    Unknown,
}

impl Gesture {
    /// Gestures the machine may play
    pub const PLAYABLE: [Gesture; 3] = [Gesture::Rock, Gesture::Paper, Gesture::Scissors];

    /// Parse gesture from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use rps_rig_types::Gesture;
    ///
    /// assert_eq!(Gesture::from_str("paper"), Some(Gesture::Paper));
    /// assert_eq!(Gesture::from_str("UNKNOWN"), Some(Gesture::Unknown));
    /// assert_eq!(Gesture::from_str("spock"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rock" => Some(Gesture::Rock),
            "paper" => Some(Gesture::Paper),
            "scissors" => Some(Gesture::Scissors),
            "unknown" => Some(Gesture::Unknown),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Rock => "rock",
            Gesture::Paper => "paper",
            Gesture::Scissors => "scissors",
            Gesture::Unknown => "unknown",
        }
    }

    pub fn is_playable(&self) -> bool {
        !matches!(self, Gesture::Unknown)
    }

    /// The gesture this one defeats, if any
    ///
    /// # Examples
    ///
    /// ```
    /// use rps_rig_types::Gesture;
    ///
    /// assert_eq!(Gesture::Rock.beats(), Some(Gesture::Scissors));
    /// assert_eq!(Gesture::Unknown.beats(), None);
    /// ```
    pub fn beats(&self) -> Option<Gesture> {
        match self {
            Gesture::Rock => Some(Gesture::Scissors),
            Gesture::Paper => Some(Gesture::Rock),
            Gesture::Scissors => Some(Gesture::Paper),
            Gesture::Unknown => None,
        }
    }
}

/// Result of one round, seen from the human's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Draw,
    HumanWins,
    MachineWins,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Draw => "draw",
            Outcome::HumanWins => "humanWins",
            Outcome::MachineWins => "machineWins",
        }
    }

    /// Which side scores a point, if any
    pub fn scorer(&self) -> Option<Player> {
        match self {
            Outcome::Draw => None,
            Outcome::HumanWins => Some(Player::Human),
            Outcome::MachineWins => Some(Player::Machine),
        }
    }
}

/// The two sides of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Machine,
}

impl Player {
    /// Display name used on the scoreboard ("Robot" for the machine)
    pub fn label(&self) -> &'static str {
        match self {
            Player::Human => "Human",
            Player::Machine => "Robot",
        }
    }
}

/// The five touch contacts of the sensing glove
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Little,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Little,
    ];

    /// Bit of this finger in a contact mask
    pub fn bit(&self) -> u8 {
        match self {
            Finger::Thumb => 1 << 0,
            Finger::Index => 1 << 1,
            Finger::Middle => 1 << 2,
            Finger::Ring => 1 << 3,
            Finger::Little => 1 << 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Finger::Thumb => "thumb",
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Little => "little",
        }
    }
}

/// Set of touched contacts (5-bit mask)
///
/// A missing reading is "not touched"; sensing collaborators are expected
/// to map faults to an untouched contact before building this value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Contacts(u8);

impl Contacts {
    /// Mask of all valid contact bits
    pub const MASK: u8 = 0b1_1111;

    /// No finger touching
    pub const NONE: Contacts = Contacts(0);

    /// Build from a raw mask; bits above bit 4 are ignored
    pub fn from_bits(bits: u8) -> Self {
        Self(bits & Self::MASK)
    }

    pub fn from_fingers(fingers: &[Finger]) -> Self {
        let mut c = Self::NONE;
        for f in fingers {
            c.set(*f, true);
        }
        c
    }

    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn is_touched(&self, finger: Finger) -> bool {
        self.0 & finger.bit() != 0
    }

    pub fn set(&mut self, finger: Finger, touched: bool) {
        if touched {
            self.0 |= finger.bit();
        } else {
            self.0 &= !finger.bit();
        }
    }

    pub fn toggle(&mut self, finger: Finger) {
        self.0 ^= finger.bit();
    }
}

/// Angle commands for the three gesture arms, in degrees (0-180)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServoAngles(pub [u8; SERVO_COUNT]);

impl ServoAngles {
    pub const fn new(first: u8, second: u8, third: u8) -> Self {
        Self([first, second, third])
    }

    pub fn angles(&self) -> [u8; SERVO_COUNT] {
        self.0
    }
}
