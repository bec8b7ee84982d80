//! match-runner: headless AI-vs-AI match driver.
//!
//! Usage:
//!   match-runner run --seed 42
//!   match-runner run --seed 7 --events --snapshot-every 60
//!
//! Runs a complete match between two AI players and prints a JSON result
//! summary to stdout. Progress and diagnostics go to stderr. Useful for
//! balance sweeps and for reproducing a match from its seed.

use std::process;

use voidfall_core::commands::PlayerCommand;
use voidfall_core::enums::TurnPhase;
use voidfall_core::events::GameEvent;
use voidfall_lottery::LotteryConfig;
use voidfall_sim::{MatchConfig, MatchEngine, PlayerSetup};

/// Hard tick limit: the per-turn safety ceiling bounds every turn, so a
/// match that runs this long indicates a bug worth failing loudly on.
const MAX_TICKS: u64 = 10_000_000;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "match-runner: VOIDFALL headless match driver\n\
         \n\
         Commands:\n\
         \n\
         run   Run a complete AI-vs-AI match to its outcome\n\
         \n\
           --seed <N>           RNG seed (default: 42); same seed, same match\n\
           --events             Print every game event to stderr as it fires\n\
           --snapshot-every <N> Print a full JSON snapshot to stdout every N ticks\n\
         \n\
         Examples:\n\
         \n\
           match-runner run --seed 42\n\
           match-runner run --seed 7 --events --snapshot-every 300\n"
    );
}

fn parse_u64(args: &[String], flag: &str, default: u64) -> u64 {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            if let Ok(n) = args[i + 1].parse::<u64>() {
                return n;
            }
            eprintln!("Error: {flag} expects a number, got '{}'", args[i + 1]);
            process::exit(1);
        }
    }
    default
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn cmd_run(args: &[String]) {
    let seed = parse_u64(args, "--seed", 42);
    let print_events = has_flag(args, "--events");
    let snapshot_every = parse_u64(args, "--snapshot-every", 0);

    eprintln!("Seed: {seed}");

    let mut engine = MatchEngine::new(MatchConfig {
        seed,
        players: vec![PlayerSetup::ai("ALPHA"), PlayerSetup::ai("BRAVO")],
        lottery: LotteryConfig::default(),
    });
    engine.queue_command(PlayerCommand::StartMatch);

    let mut turns = 0u32;
    let mut explosions = 0u64;
    let mut final_snapshot = None;

    for tick in 0..MAX_TICKS {
        let snapshot = engine.tick();

        for event in &snapshot.events {
            match event {
                GameEvent::TurnAdvanced { next_player, turn } => {
                    turns = *turn;
                    log::info!("turn {turn}: player {next_player} to act");
                }
                GameEvent::ExplosionAt { .. } => explosions += 1,
                GameEvent::Diagnostic { code, detail } => {
                    log::warn!("{code:?}: {detail}");
                }
                _ => {}
            }
            if print_events {
                match serde_json::to_string(event) {
                    Ok(json) => eprintln!("{json}"),
                    Err(e) => eprintln!("Error serializing event: {e}"),
                }
            }
        }

        if snapshot_every > 0 && tick % snapshot_every == 0 {
            match serde_json::to_string(&snapshot) {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing snapshot: {e}");
                    process::exit(1);
                }
            }
        }

        if snapshot.phase == TurnPhase::GameOver {
            final_snapshot = Some(snapshot);
            break;
        }
    }

    let Some(snapshot) = final_snapshot else {
        eprintln!("Error: match did not finish within {MAX_TICKS} ticks");
        process::exit(1);
    };

    let winner = snapshot
        .outcome
        .and_then(|o| match o {
            voidfall_core::enums::MatchOutcome::Winner(index) => Some(index),
            voidfall_core::enums::MatchOutcome::Draw => None,
        })
        .map(|index| snapshot.players[index].name.clone());

    eprintln!(
        "Match over after {} ticks ({:.1}s simulated), {} turns, {} explosions",
        snapshot.time.tick, snapshot.time.elapsed_secs, turns, explosions
    );
    match &winner {
        Some(name) => eprintln!("Winner: {name}"),
        None => eprintln!("Draw"),
    }

    let summary = serde_json::json!({
        "seed": seed,
        "ticks": snapshot.time.tick,
        "turns": turns,
        "explosions": explosions,
        "winner": winner,
        "players": snapshot.players.iter().map(|p| {
            serde_json::json!({ "name": p.name, "health": p.health, "alive": p.alive })
        }).collect::<Vec<_>>(),
    });
    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing summary: {e}");
            process::exit(1);
        }
    }
}
