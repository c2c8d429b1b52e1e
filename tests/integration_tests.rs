//! Integration tests for the game session driven round by round

use rps_rig::core::{
    resolve, sense_human_gesture, GameSession, MachineHand, Phase, ServoBank, StatusSnapshot,
    UnknownGesturePolicy,
};
use rps_rig::types::{Contacts, Finger, Gesture, Outcome, ROUND_SECONDS, WIN_THRESHOLD};

/// Contacts that read as `g`
fn contacts_for(g: Gesture) -> Contacts {
    match g {
        Gesture::Rock => Contacts::from_fingers(&[Finger::Thumb, Finger::Middle]),
        Gesture::Paper => Contacts::NONE,
        Gesture::Scissors => Contacts::from_fingers(&[Finger::Thumb, Finger::Ring]),
        Gesture::Unknown => Contacts::from_fingers(&[Finger::Index]),
    }
}

fn counter(g: Gesture) -> Gesture {
    Gesture::PLAYABLE
        .into_iter()
        .find(|c| c.beats() == Some(g))
        .unwrap()
}

fn loser_to(g: Gesture) -> Gesture {
    g.beats().unwrap()
}

#[test]
fn test_scissors_contact_pattern() {
    let c = Contacts::from_fingers(&[Finger::Thumb, Finger::Ring, Finger::Little]);
    assert_eq!(sense_human_gesture(c), Gesture::Scissors);
}

#[test]
fn test_resolver_examples() {
    assert_eq!(resolve(Gesture::Rock, Gesture::Scissors), Outcome::HumanWins);
    assert_eq!(resolve(Gesture::Paper, Gesture::Paper), Outcome::Draw);
    assert_eq!(resolve(Gesture::Unknown, Gesture::Rock), Outcome::MachineWins);
}

#[test]
fn test_first_round_rearms_countdown() {
    let mut session = GameSession::new(2024);
    let mut servos = ServoBank::new();

    let report = session
        .tick(ROUND_SECONDS, &mut contacts_for(Gesture::Rock), &mut servos)
        .expect("round should resolve");

    assert_eq!(report.round, 1);
    assert!(!report.game_over);
    assert!(!session.round_in_progress());
    assert_eq!(session.countdown(), ROUND_SECONDS);
    assert_eq!(session.phase(), Phase::AwaitingRound);
    assert_eq!(servos.commands(), 1);
}

#[test]
fn test_third_human_win_finishes_game() {
    let seed = 77;
    let mut predictor = MachineHand::new(seed);
    let mut session = GameSession::new(seed);
    let mut servos = ServoBank::new();

    for round in 1..=WIN_THRESHOLD {
        let mut hand = contacts_for(counter(predictor.draw()));
        let report = session.tick(ROUND_SECONDS, &mut hand, &mut servos).unwrap();
        assert_eq!(report.outcome, Some(Outcome::HumanWins));
        assert_eq!(report.human_score, round);
    }

    let snap = session.snapshot();
    assert_eq!(snap.human_score, 3);
    assert_eq!(snap.machine_score, 0);
    assert!(snap.game_over);
    assert_eq!(snap.countdown, 0);

    // Finished absorbs further ticks.
    for _ in 0..5 {
        assert!(session
            .tick(ROUND_SECONDS, &mut Contacts::NONE, &mut servos)
            .is_none());
    }
    assert_eq!(session.snapshot(), snap);
    assert_eq!(servos.commands(), WIN_THRESHOLD);
}

#[test]
fn test_reset_after_finish_returns_defaults() {
    let mut session = GameSession::new(5);
    let mut servos = ServoBank::new();
    while !session.game_over() {
        session.tick(ROUND_SECONDS, &mut contacts_for(Gesture::Unknown), &mut servos);
    }

    session.reset();
    let snap = session.snapshot();
    assert_eq!(
        snap,
        StatusSnapshot {
            human_score: 0,
            machine_score: 0,
            human_gesture: Gesture::Unknown,
            machine_gesture: Gesture::Unknown,
            countdown: 5,
            game_over: false,
        }
    );
}

#[test]
fn test_resolver_is_antisymmetric_for_playable_pairs() {
    for a in Gesture::PLAYABLE {
        for b in Gesture::PLAYABLE {
            let ab = resolve(a, b);
            let ba = resolve(b, a);
            match ab {
                Outcome::Draw => assert_eq!(ba, Outcome::Draw),
                Outcome::HumanWins => assert_eq!(ba, Outcome::MachineWins),
                Outcome::MachineWins => assert_eq!(ba, Outcome::HumanWins),
            }
        }
    }
}

#[test]
fn test_scores_monotonic_and_bounded() {
    let gestures = [
        Gesture::Rock,
        Gesture::Paper,
        Gesture::Scissors,
        Gesture::Unknown,
    ];

    for seed in 0..50u32 {
        let mut session = GameSession::new(seed);
        let mut servos = ServoBank::new();
        let mut prev = session.snapshot();

        for step in 0..40usize {
            let elapsed = (step as u32 * 7 + seed) % 9;
            let mut hand = contacts_for(gestures[(step + seed as usize) % gestures.len()]);
            session.tick(elapsed, &mut hand, &mut servos);

            let snap = session.snapshot();
            assert!(snap.human_score >= prev.human_score);
            assert!(snap.machine_score >= prev.machine_score);
            assert!(snap.human_score <= WIN_THRESHOLD);
            assert!(snap.machine_score <= WIN_THRESHOLD);
            assert!(snap.countdown <= ROUND_SECONDS);
            if prev.game_over {
                assert!(snap.game_over);
            }
            prev = snap;
        }
    }
}

#[test]
fn test_game_over_set_in_the_threshold_tick() {
    let mut session = GameSession::new(11);
    let mut servos = ServoBank::new();

    loop {
        let before = session.snapshot();
        let report = session
            .tick(ROUND_SECONDS, &mut contacts_for(Gesture::Paper), &mut servos)
            .unwrap();
        let reached = report.human_score == WIN_THRESHOLD || report.machine_score == WIN_THRESHOLD;
        assert!(!before.game_over);
        assert_eq!(report.game_over, reached);
        assert_eq!(session.game_over(), reached);
        if reached {
            break;
        }
    }
}

#[test]
fn test_huge_elapsed_floors_at_zero() {
    let mut session = GameSession::new(3).with_unknown_policy(UnknownGesturePolicy::Replay);
    let mut servos = ServoBank::new();

    let report = session.tick(u32::MAX, &mut Contacts::NONE, &mut servos);
    assert_eq!(report.map(|r| r.round), Some(1));
    // Excess seconds are discarded; the next round starts from a full countdown.
    assert_eq!(session.countdown(), ROUND_SECONDS);
}

#[test]
fn test_reset_twice_is_idempotent() {
    let mut session = GameSession::new(9);
    let mut servos = ServoBank::new();
    session.tick(ROUND_SECONDS, &mut contacts_for(Gesture::Rock), &mut servos);
    session.tick(2, &mut contacts_for(Gesture::Rock), &mut servos);

    session.reset();
    let first = session.snapshot();
    session.reset();
    let second = session.snapshot();
    assert_eq!(first, second);
    assert_eq!(first, StatusSnapshot::default());
}

#[test]
fn test_one_expiry_scores_at_most_once() {
    let seed = 31;
    let mut predictor = MachineHand::new(seed);
    let mut session = GameSession::new(seed);
    let mut servos = ServoBank::new();

    // Lose the first two rounds so the machine sits one point from the end.
    for _ in 0..2 {
        let mut hand = contacts_for(loser_to(predictor.draw()));
        session.tick(ROUND_SECONDS, &mut hand, &mut servos).unwrap();
    }
    let mut hand = contacts_for(loser_to(predictor.draw()));
    session.tick(ROUND_SECONDS, &mut hand, &mut servos).unwrap();
    assert_eq!(session.machine_score(), 3);
    assert!(session.game_over());

    // Countdown is pinned at zero; repeated ticks resolve nothing more.
    for _ in 0..10 {
        assert!(session.tick(0, &mut hand, &mut servos).is_none());
        assert!(session.tick(1, &mut hand, &mut servos).is_none());
    }
    assert_eq!(session.machine_score(), 3);
    assert_eq!(session.rounds_played(), 3);
}

#[test]
fn test_replay_policy_voids_unknown_rounds() {
    let mut session = GameSession::new(1).with_unknown_policy(UnknownGesturePolicy::Replay);
    let mut servos = ServoBank::new();

    for _ in 0..10 {
        let report = session
            .tick(ROUND_SECONDS, &mut contacts_for(Gesture::Unknown), &mut servos)
            .unwrap();
        assert_eq!(report.outcome, None);
    }
    let snap = session.snapshot();
    assert_eq!(snap.human_score, 0);
    assert_eq!(snap.machine_score, 0);
    assert!(!snap.game_over);
    assert_eq!(snap.human_gesture, Gesture::Unknown);
    assert!(snap.machine_gesture.is_playable());
}

#[test]
fn test_forfeit_policy_gives_unknown_rounds_to_machine() {
    let mut session = GameSession::new(1);
    let mut servos = ServoBank::new();

    for round in 1..=WIN_THRESHOLD {
        let report = session
            .tick(ROUND_SECONDS, &mut contacts_for(Gesture::Unknown), &mut servos)
            .unwrap();
        assert_eq!(report.outcome, Some(Outcome::MachineWins));
        assert_eq!(report.machine_score, round);
    }
    assert!(session.game_over());
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed: u32| {
        let mut session = GameSession::new(seed);
        let mut servos = ServoBank::new();
        let mut log = Vec::new();
        let mut hand = contacts_for(Gesture::Rock);
        while let Some(r) = session.tick(ROUND_SECONDS, &mut hand, &mut servos) {
            log.push((r.machine, r.outcome));
            if r.game_over {
                break;
            }
        }
        log
    };
    assert_eq!(play(4242), play(4242));
}
