//! mine-gen: generate mines and drive the player from the command line.
//!
//! Usage:
//!   mine-gen generate --config mine.json --seed 7
//!   mine-gen walk --ticks 100 --y 1 --yaw 90

use std::path::PathBuf;
use std::process;

use mineworks_core::commands::SceneCommand;
use mineworks_sim::{SceneConfig, SceneEngine};
use tracing_subscriber::EnvFilter;

fn main() {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "generate" => cmd_generate(&args[2..]),
        "walk" => cmd_walk(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

/// Log to stderr, filtered by `RUST_LOG` (default `info`).
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    eprintln!(
        "mine-gen: MINEWORKS mine generator and scene driver\n\
         \n\
         Commands:\n\
         \n\
         generate  Generate a mine and print its map\n\
         \n\
           --config <path>    Scene config JSON (optional, defaults otherwise)\n\
           --seed <N>         Override the config seed\n\
           --json             Print the scene snapshot as JSON instead of a map\n\
         \n\
         walk      Step the player with a held input and print where it ends up\n\
         \n\
           --config <path>    Scene config JSON (optional)\n\
           --ticks <N>        Physics steps to run (default: 50)\n\
           --x <f> --y <f>    Held movement axis (default: 0, 1)\n\
           --yaw <deg>        Camera horizontal axis (default: 0)\n\
         \n\
         Examples:\n\
         \n\
           mine-gen generate --seed 7\n\
           RUST_LOG=debug mine-gen generate --config mine.json --json\n\
           mine-gen walk --ticks 100 --yaw 90\n"
    );
}

fn parse_flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_flag_value(args, flag) {
        Some(raw) => match raw.parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("Error: {flag} expects a number, got {raw:?}");
                process::exit(1);
            }
        },
        None => default,
    }
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

/// Load the config named by `--config`, or defaults. Applies `--seed`.
fn load_config(args: &[String]) -> SceneConfig {
    let mut config = match parse_flag_value(args, "--config") {
        Some(path) => match SceneConfig::load(&PathBuf::from(path)) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Error: {err}");
                process::exit(1);
            }
        },
        None => SceneConfig::default(),
    };
    config.seed = parse_number(args, "--seed", config.seed);
    config
}

fn build_engine(config: SceneConfig) -> SceneEngine {
    match SceneEngine::new(config) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    }
}

// --- Generate command ---

fn cmd_generate(args: &[String]) {
    let mut config = load_config(args);
    config.generate_on_start = true;
    let seed = config.seed;
    tracing::info!(seed, "generating mine");
    let mut engine = build_engine(config);

    if has_flag(args, "--json") {
        let snapshot = engine.snapshot();
        match serde_json::to_string_pretty(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Error: could not serialize snapshot: {err}");
                process::exit(1);
            }
        }
        return;
    }

    let Some(layout) = engine.layout() else {
        eprintln!("Error: no mine was generated");
        process::exit(1);
    };

    print!("{}", layout.render_ascii());
    println!();
    println!("seed:       {seed}");
    println!(
        "rooms:      {} / {} required",
        layout.outcome.placed, layout.outcome.required
    );
    println!(
        "occupied:   {} of {} cells",
        layout.grid.occupied_count(),
        layout.grid.width() * layout.grid.height()
    );
    println!("attempts:   {}", layout.outcome.attempts);
    println!("backtracks: {}", layout.outcome.backtracks);
    for room in &layout.rooms {
        println!(
            "  room {:>3} at ({:>3}, {:>3}) {}x{}",
            room.id, room.anchor.x, room.anchor.y, room.width, room.length
        );
    }
}

// --- Walk command ---

fn cmd_walk(args: &[String]) {
    let config = load_config(args);
    let ticks: u32 = parse_number(args, "--ticks", 50);
    let x: f32 = parse_number(args, "--x", 0.0);
    let y: f32 = parse_number(args, "--y", 1.0);
    let yaw: f32 = parse_number(args, "--yaw", 0.0);

    let mut engine = build_engine(config);
    engine.queue_commands([
        SceneCommand::SetCameraYaw { degrees: yaw },
        SceneCommand::Move { x, y },
    ]);

    let mut last = engine.snapshot();
    for _ in 0..ticks {
        last = engine.tick();
    }

    let Some(player) = last.player else {
        eprintln!("Error: scene has no player");
        process::exit(1);
    };
    println!("ticks:    {}", last.time.tick);
    println!("elapsed:  {:.2}s", last.time.elapsed_secs);
    println!(
        "position: ({:.3}, {:.3}, {:.3})",
        player.position.x, player.position.y, player.position.z
    );
    println!(
        "velocity: ({:.3}, {:.3}, {:.3})",
        player.velocity.x, player.velocity.y, player.velocity.z
    );
    println!("yaw:      {:.1} deg", player.yaw_degrees);
}
