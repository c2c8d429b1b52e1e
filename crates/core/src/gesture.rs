//! Gesture transducers - pure mappings at the sensor and actuator edges

use crate::types::{Contacts, Finger, Gesture, ServoAngles};

/// Arm positions for each playable gesture
const ROCK_ANGLES: ServoAngles = ServoAngles::new(180, 180, 180);
const PAPER_ANGLES: ServoAngles = ServoAngles::new(0, 0, 0);
const SCISSORS_ANGLES: ServoAngles = ServoAngles::new(180, 0, 180);

/// Read a gesture from the touched contacts
///
/// Thumb, ring and little fingers form the "outer" group, index and middle
/// the "inner" group:
///
/// | outer | inner | gesture |
/// |-------|-------|---------|
/// | yes | no | Scissors |
/// | yes | yes | Rock |
/// | no | no | Paper |
/// | no | yes | Unknown |
///
/// Total over all 32 contact combinations.
pub fn sense_human_gesture(contacts: Contacts) -> Gesture {
    let outer = contacts.is_touched(Finger::Thumb)
        || contacts.is_touched(Finger::Ring)
        || contacts.is_touched(Finger::Little);
    let inner = contacts.is_touched(Finger::Index) || contacts.is_touched(Finger::Middle);

    match (outer, inner) {
        (true, false) => Gesture::Scissors,
        (true, true) => Gesture::Rock,
        (false, false) => Gesture::Paper,
        (false, true) => Gesture::Unknown,
    }
}

/// Servo angles that show `gesture` on the arms
///
/// `Unknown` has no arm pose and yields `None`.
pub fn actuate_gesture(gesture: Gesture) -> Option<ServoAngles> {
    match gesture {
        Gesture::Rock => Some(ROCK_ANGLES),
        Gesture::Paper => Some(PAPER_ANGLES),
        Gesture::Scissors => Some(SCISSORS_ANGLES),
        Gesture::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(bits: u8) -> Gesture {
        let outer = bits & 0b11001 != 0;
        let inner = bits & 0b00110 != 0;
        if outer && !inner {
            Gesture::Scissors
        } else if outer && inner {
            Gesture::Rock
        } else if !outer && !inner {
            Gesture::Paper
        } else {
            Gesture::Unknown
        }
    }

    #[test]
    fn test_all_contact_masks() {
        for bits in 0u8..32 {
            assert_eq!(
                sense_human_gesture(Contacts::from_bits(bits)),
                reference(bits),
                "mask {:05b}",
                bits
            );
        }
    }

    #[test]
    fn test_outer_fingers_only_is_scissors() {
        let c = Contacts::from_fingers(&[Finger::Thumb, Finger::Ring, Finger::Little]);
        assert_eq!(sense_human_gesture(c), Gesture::Scissors);
    }

    #[test]
    fn test_open_hand_is_paper() {
        assert_eq!(sense_human_gesture(Contacts::NONE), Gesture::Paper);
    }

    #[test]
    fn test_inner_fingers_only_is_unknown() {
        let c = Contacts::from_fingers(&[Finger::Index, Finger::Middle]);
        assert_eq!(sense_human_gesture(c), Gesture::Unknown);
    }

    #[test]
    fn test_arm_poses() {
        assert_eq!(actuate_gesture(Gesture::Rock), Some(ServoAngles::new(180, 180, 180)));
        assert_eq!(actuate_gesture(Gesture::Paper), Some(ServoAngles::new(0, 0, 0)));
        assert_eq!(
            actuate_gesture(Gesture::Scissors),
            Some(ServoAngles::new(180, 0, 180))
        );
        assert_eq!(actuate_gesture(Gesture::Unknown), None);
    }
}
