//! # Speed-Match Scenario Tests
//!
//! End-to-end exercises of the challenge engine through its public
//! contract: uniform target generation, the exact-match win scenario, the
//! near-miss scenario, and timer behavior across the full lifecycle.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;

use vitrine_challenge::{
    Body, ChallengeConfig, ChallengeEngine, ChallengeEvent, Color, Configuration, Selection,
    Wheels,
};
use vitrine_core::ManualScheduler;

fn seeded_engine(seed: u64) -> ChallengeEngine<ChaCha8Rng> {
    ChallengeEngine::with_rng(ChallengeConfig::default(), ChaCha8Rng::seed_from_u64(seed))
}

/// Starts engines until one draws the wanted target.
///
/// 24 variants and uniform sampling: a few hundred seeds always suffice.
fn started_engine_with_target(
    want: Configuration,
    sched: &mut ManualScheduler,
) -> ChallengeEngine<ChaCha8Rng> {
    for seed in 0..10_000 {
        let mut engine = seeded_engine(seed);
        engine.start(sched).unwrap();
        if engine.target() == want {
            return engine;
        }
        engine.stop(sched);
    }
    panic!("no seed produced target {want:?}");
}

fn pump(engine: &mut ChallengeEngine<ChaCha8Rng>, sched: &mut ManualScheduler, frames: u32) {
    for _ in 0..frames {
        if sched.take_pending().is_some() {
            engine.tick(sched);
        }
    }
}

#[test]
fn target_sampling_approaches_uniform() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let n = 4000;

    let mut colors: HashMap<Color, u32> = HashMap::new();
    let mut bodies: HashMap<Body, u32> = HashMap::new();
    let mut wheels: HashMap<Wheels, u32> = HashMap::new();

    for _ in 0..n {
        let config = Configuration::sample(&mut rng);
        *colors.entry(config.color).or_default() += 1;
        *bodies.entry(config.body).or_default() += 1;
        *wheels.entry(config.wheels).or_default() += 1;
    }

    // Every domain value appears, with frequency near uniform.
    for color in Color::ALL {
        let count = *colors.get(&color).unwrap_or(&0);
        assert!((850..=1150).contains(&count), "{color:?}: {count}");
    }
    for body in Body::ALL {
        let count = *bodies.get(&body).unwrap_or(&0);
        assert!((1150..=1520).contains(&count), "{body:?}: {count}");
    }
    for wheel in Wheels::ALL {
        let count = *wheels.get(&wheel).unwrap_or(&0);
        assert!((1800..=2200).contains(&count), "{wheel:?}: {count}");
    }
}

#[test]
fn exact_match_wins_on_final_attribute() {
    let want = Configuration {
        color: Color::Azure, // "#308CFF"
        body: Body::Cube,
        wheels: Wheels::Thin,
    };
    let mut sched = ManualScheduler::new();
    let mut engine = started_engine_with_target(want, &mut sched);
    let wins = engine.subscribe();

    pump(&mut engine, &mut sched, 123);
    assert!((engine.elapsed() - 1.23).abs() < 1e-9);

    assert!(!engine.set_choice_str(&mut sched, "color", "#308CFF").unwrap());
    assert!(!engine.set_choice_str(&mut sched, "body", "Cube").unwrap());
    assert!(engine.set_choice_str(&mut sched, "wheels", "Thin").unwrap());

    // Timer frozen at whatever accumulated, exactly one terminal event.
    assert!(!engine.is_running());
    let events = wins.drain();
    assert_eq!(events.len(), 1);
    let ChallengeEvent::Won { elapsed } = events[0];
    assert!((elapsed - 1.23).abs() < 1e-9);

    // No stray tick after game end.
    assert!(!sched.has_pending());
    pump(&mut engine, &mut sched, 10);
    assert!((engine.elapsed() - 1.23).abs() < 1e-9);
}

#[test]
fn one_mismatched_attribute_keeps_running() {
    let want = Configuration {
        color: Color::Mint,
        body: Body::Cylinder,
        wheels: Wheels::Chunky,
    };
    let mut sched = ManualScheduler::new();
    let mut engine = started_engine_with_target(want, &mut sched);
    let wins = engine.subscribe();

    engine.set_choice(&mut sched, Selection::Color(Color::Mint));
    engine.set_choice(&mut sched, Selection::Body(Body::Cylinder));
    assert!(!engine.set_choice(&mut sched, Selection::Wheels(Wheels::Thin)));

    assert!(engine.is_running());
    assert!(wins.drain().is_empty());

    // Timer keeps advancing on tick.
    let before = engine.elapsed();
    pump(&mut engine, &mut sched, 3);
    assert!(engine.elapsed() > before);

    // Correcting the wrong attribute wins now.
    assert!(engine.set_choice(&mut sched, Selection::Wheels(Wheels::Chunky)));
    assert_eq!(wins.drain().len(), 1);
}

#[test]
fn reset_is_idempotent_and_unpins_target() {
    let mut engine = seeded_engine(42);
    let mut sched = ManualScheduler::new();
    engine.start(&mut sched).unwrap();
    pump(&mut engine, &mut sched, 50);

    let mut targets = Vec::new();
    for _ in 0..8 {
        engine.reset();
        assert_eq!(engine.elapsed(), 0.0);
        assert_eq!(engine.choice(), vitrine_challenge::Choice::empty());
        targets.push(engine.target());
    }
    assert!(
        targets.iter().any(|t| *t != targets[0]),
        "target pinned across resets: {targets:?}"
    );
}

#[test]
fn start_without_scheduler_surfaces_cannot_start() {
    let mut sched = ManualScheduler::unavailable();
    let mut engine = seeded_engine(7);

    let err = engine.start(&mut sched).unwrap_err();
    assert_eq!(
        err.to_string(),
        "cannot start challenge: host cannot provide frame callbacks"
    );
    assert!(!engine.is_running());

    // A working scheduler afterwards starts normally.
    let mut sched = ManualScheduler::new();
    engine.start(&mut sched).unwrap();
    assert!(engine.is_running());
    assert!(sched.has_pending());
}
