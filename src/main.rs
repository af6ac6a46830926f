//! Star Catcher entry point
//!
//! Native demo: generates a level, prints it as JSON, then plays it by
//! following hints. Usage: `star-catcher [level] [seed]`.

use star_catcher::progress::{ProgressStore, record_outcome};
use star_catcher::{Attempt, Engine, EngineEvent, MemoryProgress, Tuning, generate_level};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let level_index = parse_arg(args.next(), "level", 1u32);
    let seed = parse_arg(args.next(), "seed", 42u64);
    log::info!("Star Catcher (native) starting: level {} seed {}", level_index, seed);

    let level = match generate_level(level_index, seed) {
        Ok(level) => level,
        Err(e) => {
            eprintln!("Could not generate level {}: {}", level_index, e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&level) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize level: {}", e),
    }

    let tuning = Tuning::default();
    let mut attempt = Attempt::new(level_index, &tuning);
    let mut engine = Engine::with_tuning(level, &tuning);
    let mut progress = MemoryProgress::new();
    progress.mark_level_unlocked(level_index);

    // Pretend each connection takes two seconds to find
    let mut remaining_ms = attempt.time_limit_ms;
    while let Some(hint) = engine.request_hint() {
        let Some((from, to)) = engine.level().segment(&hint) else {
            break;
        };
        remaining_ms = remaining_ms.saturating_sub(2_000);

        engine.on_pointer_down(from);
        let mut events = engine.on_pointer_move(from.lerp(to, 0.5));
        events.extend(engine.on_pointer_move(to));
        events.extend(engine.on_pointer_up(to));

        for event in &events {
            match event {
                EngineEvent::PreviewChanged { state, from, .. } => {
                    log::debug!("Preview from {}: {:?}", from, state)
                }
                EngineEvent::ConnectionConfirmed(c) => println!("Connected {:?}", c.ids()),
                EngineEvent::LevelCompleted => println!("Constellation complete!"),
            }
        }

        if !engine.progress().is_confirmed(&hint) {
            println!("Connection {:?} is blocked, giving up", hint.ids());
            break;
        }
    }

    let outcome = attempt.finish(&engine, remaining_ms);
    println!("Outcome: {:?}", outcome);
    if record_outcome(&mut progress, &outcome) {
        println!("Unlocked level {}", progress.highest_unlocked_level());
    }
}

fn parse_arg<T: std::str::FromStr>(arg: Option<String>, name: &str, default: T) -> T {
    match arg {
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Invalid {} '{}', using default", name, raw);
            default
        }),
        None => default,
    }
}
