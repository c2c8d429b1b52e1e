//! Outcome resolver

use crate::types::{Gesture, Outcome};

/// Decide a round from the human's and the machine's gestures
///
/// Equal gestures draw. Rock beats scissors, paper beats rock and scissors
/// beat paper. Every other pair, including any pair with an `Unknown` human
/// gesture, goes to the machine.
///
/// # Examples
///
/// ```
/// use rps_rig_core::resolve;
/// use rps_rig_types::{Gesture, Outcome};
///
/// assert_eq!(resolve(Gesture::Rock, Gesture::Scissors), Outcome::HumanWins);
/// assert_eq!(resolve(Gesture::Paper, Gesture::Paper), Outcome::Draw);
/// assert_eq!(resolve(Gesture::Unknown, Gesture::Rock), Outcome::MachineWins);
/// ```
pub fn resolve(human: Gesture, machine: Gesture) -> Outcome {
    if human == machine {
        return Outcome::Draw;
    }
    if human.beats() == Some(machine) {
        Outcome::HumanWins
    } else {
        Outcome::MachineWins
    }
}
