//! outbreak-soak: headless autopilot that plays runs and reports stats.
//!
//! Usage:
//!   outbreak-soak run --seed 7 --ticks 36000
//!   outbreak-soak run --config soak.json --wave 5
//!   outbreak-soak config > soak.json

use std::path::{Path, PathBuf};
use std::process;

use outbreak_core::commands::{Aim, ControlInput, PlayerCommand};
use outbreak_core::enums::GamePhase;
use outbreak_core::state::GameStateSnapshot;
use outbreak_sim::{SimConfig, SimulationEngine};

/// Ten simulated minutes at the fixed tick rate.
const DEFAULT_TICKS: u64 = 36_000;

#[derive(Debug, thiserror::Error)]
enum SoakError {
    #[error("bad argument {flag}: {value}")]
    BadArgument { flag: &'static str, value: String },
    #[error("reading config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing config {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

fn main() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(String::as_str).unwrap_or("run");
    let rest = args.get(2..).unwrap_or(&[]);

    let result = match command {
        "run" => cmd_run(rest),
        "config" => cmd_config(),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!(
        "outbreak-soak: OUTBREAK headless soak harness\n\
         \n\
         Commands:\n\
         \n\
         run       Play one run on autopilot and print final stats as JSON\n\
         \n\
           --config <path>  SimConfig JSON file (optional)\n\
           --seed <N>       Override the RNG seed\n\
           --wave <N>       Override the starting wave\n\
           --ticks <N>      Tick limit (default: 36000)\n\
           --no-director    Disable spawning\n\
         \n\
         config    Print the default SimConfig as JSON\n"
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_flag<T: std::str::FromStr>(
    args: &[String],
    flag: &'static str,
) -> Result<Option<T>, SoakError> {
    match flag_value(args, flag) {
        Some(raw) => raw.parse().map(Some).map_err(|_| SoakError::BadArgument {
            flag,
            value: raw.to_string(),
        }),
        None => Ok(None),
    }
}

fn load_config(path: &Path) -> Result<SimConfig, SoakError> {
    let text = std::fs::read_to_string(path).map_err(|source| SoakError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SoakError::Json {
        path: path.to_path_buf(),
        source,
    })
}

// --- Config command ---

fn cmd_config() -> Result<(), SoakError> {
    let json = serde_json::to_string_pretty(&SimConfig::default()).map_err(|source| {
        SoakError::Json {
            path: PathBuf::from("<stdout>"),
            source,
        }
    })?;
    println!("{json}");
    Ok(())
}

// --- Run command ---

fn cmd_run(args: &[String]) -> Result<(), SoakError> {
    let mut config = match flag_value(args, "--config") {
        Some(path) => load_config(Path::new(path))?,
        None => SimConfig::default(),
    };
    if let Some(seed) = parse_flag(args, "--seed")? {
        config.seed = seed;
    }
    if let Some(wave) = parse_flag(args, "--wave")? {
        config.starting_wave = wave;
    }
    if args.iter().any(|a| a == "--no-director") {
        config.director_enabled = false;
    }
    let max_ticks: u64 = parse_flag(args, "--ticks")?.unwrap_or(DEFAULT_TICKS);

    log::info!(
        "soak: seed={} wave={} director={} ticks={max_ticks}",
        config.seed,
        config.starting_wave,
        config.director_enabled
    );

    let mut engine = SimulationEngine::new(config);
    engine.queue_command(PlayerCommand::StartRun);
    let mut snap = engine.tick();

    while snap.time.tick < max_ticks && snap.phase == GamePhase::Running {
        engine.apply_input(autopilot(&snap));
        snap = engine.tick();
    }

    let report = serde_json::json!({
        "ended": snap.phase == GamePhase::Ended,
        "ticks": snap.time.tick,
        "stats": snap.stats,
        "accuracy": if snap.stats.shots_fired > 0 {
            snap.stats.shots_hit as f64 / snap.stats.shots_fired as f64
        } else {
            0.0
        },
    });
    println!("{report:#}");
    Ok(())
}

/// Back away from the nearest visible unit while strafing, auto-aim and keep
/// the trigger held. Top up the clip when nothing is in view.
fn autopilot(snap: &GameStateSnapshot) -> ControlInput {
    let me = snap.player.position;
    let nearest = snap
        .zombies
        .iter()
        .min_by(|a, b| me.distance_to(&a.position).total_cmp(&me.distance_to(&b.position)));

    let (move_x, move_y) = match nearest {
        Some(z) => {
            let dx = me.x - z.position.x;
            let dy = me.y - z.position.y;
            let len = dx.hypot(dy).max(1e-6);
            // Sideways component keeps the player circling instead of pinned to a wall.
            (dx / len - 0.6 * dy / len, dy / len + 0.6 * dx / len)
        }
        None => (0.0, 0.0),
    };

    ControlInput {
        move_x,
        move_y,
        aim: Aim::Auto,
        fire_held: nearest.is_some(),
        reload_requested: nearest.is_none() && snap.ammo.clip < snap.ammo.capacity,
    }
}
