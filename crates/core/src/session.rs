//! Game session module - the round state machine
//!
//! This module ties together the transducers, resolver, clock and the machine's
//! hand. It owns every piece of mutable game state and advances it only from
//! [`GameSession::tick`] and [`GameSession::reset`].
//!
//! # States
//!
//! ```text
//! AwaitingRound --(countdown hits 0)--> ResolvingRound --+--> AwaitingRound (re-armed)
//!                                                        +--> Finished (terminal)
//! ```
//!
//! `ResolvingRound` only exists inside a single `tick` call.

use crate::clock::RoundClock;
use crate::gesture::{actuate_gesture, sense_human_gesture};
use crate::resolve::resolve;
use crate::rng::MachineHand;
use crate::snapshot::StatusSnapshot;
use crate::types::*;

/// Sensing collaborator: reads the five touch contacts
///
/// Reads are immediate. A contact that cannot be read must come back as
/// "not touched".
pub trait ContactSensor {
    fn read_contacts(&mut self) -> Contacts;
}

/// Actuation collaborator: moves the gesture arms
///
/// Fire-and-forget; the session never waits for the arms.
pub trait GestureActuator {
    fn actuate(&mut self, angles: ServoAngles);
}

/// A fixed contact reading
impl ContactSensor for Contacts {
    fn read_contacts(&mut self) -> Contacts {
        *self
    }
}

/// State machine phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Countdown running
    AwaitingRound,
    /// Capturing and scoring a round
    ResolvingRound,
    /// A side reached `WIN_THRESHOLD`; only `reset` leaves this state
    Finished,
}

/// What happens when the human's gesture reads as `Unknown`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UnknownGesturePolicy {
    /// The round goes to the machine
    #[default]
    Forfeit,
    /// The round is void: nobody scores and the countdown restarts
    Replay,
}

impl UnknownGesturePolicy {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "forfeit" => Some(Self::Forfeit),
            "replay" => Some(Self::Replay),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Forfeit => "forfeit",
            Self::Replay => "replay",
        }
    }
}

/// Summary of one resolved round, returned from `tick`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundReport {
    /// 1-based round number within the current game
    pub round: u32,
    pub human: Gesture,
    pub machine: Gesture,
    /// `None` when the round was voided under [`UnknownGesturePolicy::Replay`]
    pub outcome: Option<Outcome>,
    pub human_score: u32,
    pub machine_score: u32,
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameSession {
    human_score: u32,
    machine_score: u32,
    last_human_gesture: Gesture,
    last_machine_gesture: Gesture,
    last_outcome: Option<Outcome>,
    rounds_played: u32,
    clock: RoundClock,
    phase: Phase,
    hand: MachineHand,
    unknown_policy: UnknownGesturePolicy,
}

impl GameSession {
    /// Create a new game whose machine gestures are drawn from `seed`
    pub fn new(seed: u32) -> Self {
        Self {
            human_score: 0,
            machine_score: 0,
            last_human_gesture: Gesture::Unknown,
            last_machine_gesture: Gesture::Unknown,
            last_outcome: None,
            rounds_played: 0,
            clock: RoundClock::new(ROUND_SECONDS),
            phase: Phase::AwaitingRound,
            hand: MachineHand::new(seed),
            unknown_policy: UnknownGesturePolicy::default(),
        }
    }

    pub fn with_unknown_policy(mut self, policy: UnknownGesturePolicy) -> Self {
        self.unknown_policy = policy;
        self
    }

    pub fn human_score(&self) -> u32 {
        self.human_score
    }

    pub fn machine_score(&self) -> u32 {
        self.machine_score
    }

    pub fn last_human_gesture(&self) -> Gesture {
        self.last_human_gesture
    }

    pub fn last_machine_gesture(&self) -> Gesture {
        self.last_machine_gesture
    }

    pub fn last_outcome(&self) -> Option<Outcome> {
        self.last_outcome
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn countdown(&self) -> u32 {
        self.clock.remaining()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn round_in_progress(&self) -> bool {
        self.phase == Phase::ResolvingRound
    }

    pub fn unknown_policy(&self) -> UnknownGesturePolicy {
        self.unknown_policy
    }

    pub fn seed(&self) -> u32 {
        self.hand.seed()
    }

    pub fn snapshot_into(&self, out: &mut StatusSnapshot) {
        out.human_score = self.human_score;
        out.machine_score = self.machine_score;
        out.human_gesture = self.last_human_gesture;
        out.machine_gesture = self.last_machine_gesture;
        out.countdown = self.clock.remaining();
        out.game_over = self.game_over();
    }

    pub fn snapshot(&self) -> StatusSnapshot {
        let mut s = StatusSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Start a new game
    ///
    /// Scores, gestures and the countdown return to their initial values.
    /// The machine's random stream and the unknown-gesture policy carry over.
    pub fn reset(&mut self) {
        self.human_score = 0;
        self.machine_score = 0;
        self.last_human_gesture = Gesture::Unknown;
        self.last_machine_gesture = Gesture::Unknown;
        self.last_outcome = None;
        self.rounds_played = 0;
        self.clock = RoundClock::new(ROUND_SECONDS);
        self.phase = Phase::AwaitingRound;
    }

    /// Advance the game by `elapsed_seconds` whole seconds
    ///
    /// Returns the round report when this call resolved a round. At most one
    /// round resolves per call; seconds left over after the countdown expired
    /// are discarded.
    pub fn tick(
        &mut self,
        elapsed_seconds: u32,
        sensor: &mut impl ContactSensor,
        actuator: &mut impl GestureActuator,
    ) -> Option<RoundReport> {
        if self.phase != Phase::AwaitingRound {
            return None;
        }

        self.clock.tick(elapsed_seconds);
        if !self.clock.is_expired() {
            return None;
        }

        Some(self.resolve_round(sensor, actuator))
    }

    fn resolve_round(
        &mut self,
        sensor: &mut impl ContactSensor,
        actuator: &mut impl GestureActuator,
    ) -> RoundReport {
        self.phase = Phase::ResolvingRound;

        let human = sense_human_gesture(sensor.read_contacts());
        let machine = self.hand.draw();
        self.last_human_gesture = human;
        self.last_machine_gesture = machine;

        if let Some(angles) = actuate_gesture(machine) {
            actuator.actuate(angles);
        }

        let outcome = match (human, self.unknown_policy) {
            (Gesture::Unknown, UnknownGesturePolicy::Replay) => None,
            _ => Some(resolve(human, machine)),
        };
        match outcome.and_then(|o| o.scorer()) {
            Some(Player::Human) => self.human_score += 1,
            Some(Player::Machine) => self.machine_score += 1,
            None => {}
        }
        self.last_outcome = outcome;
        self.rounds_played += 1;

        if self.human_score >= WIN_THRESHOLD || self.machine_score >= WIN_THRESHOLD {
            self.phase = Phase::Finished;
        } else {
            self.clock.arm(ROUND_SECONDS);
            self.phase = Phase::AwaitingRound;
        }

        RoundReport {
            round: self.rounds_played,
            human,
            machine,
            outcome,
            human_score: self.human_score,
            machine_score: self.machine_score,
            game_over: self.game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::servo::ServoBank;

    /// Contacts that read as `g`
    fn contacts_for(g: Gesture) -> Contacts {
        match g {
            Gesture::Rock => Contacts::from_fingers(&[Finger::Thumb, Finger::Index]),
            Gesture::Paper => Contacts::NONE,
            Gesture::Scissors => Contacts::from_fingers(&[Finger::Ring, Finger::Little]),
            Gesture::Unknown => Contacts::from_fingers(&[Finger::Middle]),
        }
    }

    /// Gesture that beats `g`
    fn counter(g: Gesture) -> Gesture {
        Gesture::PLAYABLE
            .into_iter()
            .find(|c| c.beats() == Some(g))
            .unwrap()
    }

    #[test]
    fn test_new_session() {
        let s = GameSession::new(1);
        assert_eq!(s.human_score(), 0);
        assert_eq!(s.machine_score(), 0);
        assert_eq!(s.countdown(), ROUND_SECONDS);
        assert_eq!(s.phase(), Phase::AwaitingRound);
        assert!(!s.round_in_progress());
        assert_eq!(s.last_outcome(), None);
    }

    #[test]
    fn test_partial_countdown_does_not_resolve() {
        let mut s = GameSession::new(1);
        let mut bank = ServoBank::new();
        assert!(s.tick(4, &mut Contacts::NONE, &mut bank).is_none());
        assert_eq!(s.countdown(), 1);
        assert_eq!(bank.commands(), 0);
    }

    #[test]
    fn test_expiry_resolves_and_rearms() {
        let mut s = GameSession::new(1);
        let mut bank = ServoBank::new();
        let report = s.tick(5, &mut Contacts::NONE, &mut bank).unwrap();

        assert_eq!(report.round, 1);
        assert_eq!(report.human, Gesture::Paper);
        assert!(report.machine.is_playable());
        assert_eq!(s.countdown(), ROUND_SECONDS);
        assert!(!s.round_in_progress());
        assert_eq!(bank.commands(), 1);
        assert_eq!(bank.last_angles(), actuate_gesture(report.machine));
    }

    #[test]
    fn test_oversized_tick_resolves_once() {
        let mut s = GameSession::new(1);
        let mut bank = ServoBank::new();
        assert!(s.tick(1000, &mut Contacts::NONE, &mut bank).is_some());
        assert_eq!(s.rounds_played(), 1);
        assert_eq!(s.countdown(), ROUND_SECONDS);
    }

    #[test]
    fn test_human_reaches_threshold() {
        let seed = 99;
        let mut predictor = MachineHand::new(seed);
        let mut s = GameSession::new(seed);
        let mut bank = ServoBank::new();

        for round in 1..=WIN_THRESHOLD {
            let mut hand = contacts_for(counter(predictor.draw()));
            let report = s.tick(ROUND_SECONDS, &mut hand, &mut bank).unwrap();
            assert_eq!(report.outcome, Some(Outcome::HumanWins));
            assert_eq!(report.human_score, round);
        }

        assert!(s.game_over());
        assert_eq!(s.phase(), Phase::Finished);
        assert_eq!(s.countdown(), 0);
        assert!(s.tick(100, &mut Contacts::NONE, &mut bank).is_none());
        assert_eq!(s.human_score(), WIN_THRESHOLD);
    }

    #[test]
    fn test_unknown_forfeits_by_default() {
        let mut s = GameSession::new(5);
        let mut hand = contacts_for(Gesture::Unknown);
        let report = s.tick(5, &mut hand, &mut ServoBank::new()).unwrap();
        assert_eq!(report.human, Gesture::Unknown);
        assert_eq!(report.outcome, Some(Outcome::MachineWins));
        assert_eq!(s.machine_score(), 1);
    }

    #[test]
    fn test_unknown_replay_voids_round() {
        let mut s = GameSession::new(5).with_unknown_policy(UnknownGesturePolicy::Replay);
        let mut hand = contacts_for(Gesture::Unknown);
        let report = s.tick(5, &mut hand, &mut ServoBank::new()).unwrap();
        assert_eq!(report.outcome, None);
        assert_eq!(s.human_score(), 0);
        assert_eq!(s.machine_score(), 0);
        assert_eq!(s.countdown(), ROUND_SECONDS);
        assert_eq!(s.last_outcome(), None);
        assert_eq!(s.last_human_gesture(), Gesture::Unknown);
    }

    #[test]
    fn test_reset_keeps_policy() {
        let mut s = GameSession::new(5).with_unknown_policy(UnknownGesturePolicy::Replay);
        s.tick(5, &mut Contacts::NONE, &mut ServoBank::new());
        s.reset();
        assert_eq!(s.unknown_policy(), UnknownGesturePolicy::Replay);
        assert_eq!(s.snapshot(), StatusSnapshot::default());
        assert_eq!(s.rounds_played(), 0);
    }

    #[test]
    fn test_policy_strings() {
        assert_eq!(
            UnknownGesturePolicy::from_str("Replay"),
            Some(UnknownGesturePolicy::Replay)
        );
        assert_eq!(UnknownGesturePolicy::Forfeit.as_str(), "forfeit");
        assert_eq!(UnknownGesturePolicy::from_str("retry"), None);
    }
}
