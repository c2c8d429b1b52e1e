//! Servo angle to PWM duty mapping
//!
//! The arms are driven at `PWM_FREQUENCY_HZ` with `PWM_RESOLUTION_BITS` of
//! duty resolution. Angles map linearly onto `SERVO_MIN_DUTY..=SERVO_MAX_DUTY`
//! with truncating integer arithmetic.

use crate::session::GestureActuator;
use crate::types::{
    ServoAngles, SERVO_COUNT, SERVO_MAX_ANGLE, SERVO_MAX_DUTY, SERVO_MIN_DUTY,
};

/// Duty value for one servo at `angle` degrees. Angles past 180 clamp.
///
/// # Examples
///
/// ```
/// use rps_rig_core::servo_duty;
///
/// assert_eq!(servo_duty(0), 1638);
/// assert_eq!(servo_duty(180), 8192);
/// ```
pub fn servo_duty(angle: u8) -> u32 {
    let angle = angle.min(SERVO_MAX_ANGLE) as u32;
    angle * (SERVO_MAX_DUTY - SERVO_MIN_DUTY) / SERVO_MAX_ANGLE as u32 + SERVO_MIN_DUTY
}

/// The three gesture arms
///
/// Remembers the last command it was given. A board build writes the duties to
/// its PWM channels; on a desktop the driver logs them.
#[derive(Debug, Clone, Default)]
pub struct ServoBank {
    last: Option<ServoAngles>,
    commands: u32,
}

impl ServoBank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Duty values for every arm
    pub fn duties(angles: ServoAngles) -> [u32; SERVO_COUNT] {
        angles.angles().map(servo_duty)
    }

    pub fn last_angles(&self) -> Option<ServoAngles> {
        self.last
    }

    pub fn last_duties(&self) -> Option<[u32; SERVO_COUNT]> {
        self.last.map(Self::duties)
    }

    /// Number of commands received since creation
    pub fn commands(&self) -> u32 {
        self.commands
    }
}

impl GestureActuator for ServoBank {
    fn actuate(&mut self, angles: ServoAngles) {
        self.last = Some(angles);
        self.commands = self.commands.wrapping_add(1);
    }
}
