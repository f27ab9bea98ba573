//! # Headless Scene Demo
//!
//! Drives the hero scene without a GPU: a synthetic frame clock runs fast,
//! dips to a crawl, and recovers, while a scripted player solves the
//! speed-match challenge. Prints what the presentation layer would see.
//!
//! ```text
//! cargo run --bin headless_demo [scene.toml]
//! ```

use std::path::Path;
use std::time::Instant;

use vitrine::challenge::Selection;
use vitrine::quality::QualityEvent;
use vitrine::{HeroScene, SceneConfig};

/// Frame-rate phases of the synthetic clock (seconds of demo time, fps).
const PHASES: [(f64, f64); 3] = [(3.0, 60.0), (3.0, 30.0), (3.0, 60.0)];

fn load_config() -> SceneConfig {
    match std::env::args().nth(1) {
        Some(path) => match SceneConfig::load(Path::new(&path)) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("⚠️ {err}; using defaults");
                SceneConfig::default()
            }
        },
        None => SceneConfig::default(),
    }
}

fn main() {
    let config = load_config();
    let mut scene = HeroScene::new(config);
    let tier_events = scene.subscribe_tier();

    let wall_start = Instant::now();
    scene
        .start_challenge()
        .expect("manual scheduler always schedules");

    let target = scene.challenge().target;
    println!("┌─ SPEED-MATCH CHALLENGE ────────────────────────────────┐");
    println!(
        "│ Target: {} / {} / {}",
        target.color.swatch(),
        target.body.label(),
        target.wheels.label()
    );

    // The scripted player matches one attribute per demo second.
    let picks = [
        (1.0, Selection::Color(target.color)),
        (2.0, Selection::Body(target.body)),
        (7.5, Selection::Wheels(target.wheels)),
    ];
    let mut next_pick = 0;

    let mut now = 0.0_f64;
    let mut frames = 0_u64;
    for (duration, fps) in PHASES {
        let phase_end = now + duration;
        let step = 1.0 / fps;
        while now < phase_end {
            now += step;
            frames += 1;
            scene.frame(now);

            for event in tier_events.drain() {
                let QualityEvent::TierChanged { fps: measured, .. } = event;
                let budget = scene.budget();
                println!(
                    "│ t={now:6.2}s  tier flip -> {} at {measured:.0} fps (orbit bits: {}, sparkles: {})",
                    scene.badge(),
                    budget.orbit_instances,
                    budget.sparkle_count
                );
            }

            while next_pick < picks.len() && now >= picks[next_pick].0 {
                let (_, selection) = picks[next_pick];
                next_pick += 1;
                if scene.select(selection) {
                    println!("│ t={now:6.2}s  winning pick: {selection:?}");
                }
            }
        }
    }

    // The win event posted inside the loop; one more frame drains nothing new.
    scene.frame(now + 0.01);

    println!("├─ RESULT ───────────────────────────────────────────────┤");
    match scene.last_win() {
        Some(elapsed) => println!("│ 🎉 Done in {elapsed:.2} s (game clock)"),
        None => println!("│ No win - script never completed the match"),
    }
    println!(
        "│ Frames simulated: {frames} in {:.1} ms wall time",
        wall_start.elapsed().as_secs_f64() * 1000.0
    );
    println!("│ Final tier: {}", scene.badge());
    println!("└────────────────────────────────────────────────────────┘");
}
