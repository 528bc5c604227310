use std::env;

use tracing::Level;
use war_planner::logger::{init_logger, init_stderr_logger};
use war_planner::prelude::*;
use war_planner::snapshot::load_snapshot;

const USAGE: &str = "usage: war-planner <snapshot.json> [--json] [--verbose]";

fn main() {
    let args: Vec<String> = env::args().collect();
    std::process::exit(run(&args));
}

fn run(args: &[String]) -> i32 {
    let Some(path) = args.get(1).filter(|arg| !arg.starts_with("--")) else {
        eprintln!("{USAGE}");
        return 2;
    };
    let as_json = args.iter().any(|arg| arg == "--json");
    let verbose = args.iter().any(|arg| arg == "--verbose");

    let config = Configuration::from_env();
    let logger = if config.log() {
        init_logger()
    } else {
        init_stderr_logger(if verbose { Level::DEBUG } else { Level::WARN })
    };
    if let Err(err) = logger {
        eprintln!("logging disabled: {err:#}");
    }

    let snapshot = match load_snapshot(path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            eprintln!("error: {err:#}");
            return 1;
        }
    };

    let plan = WarPlanner::new(config).plan(&snapshot.home, &snapshot.away, snapshot.context);

    if as_json {
        match serde_json::to_string_pretty(&plan) {
            Ok(payload) => println!("{payload}"),
            Err(err) => {
                eprintln!("failed to serialize war plan: {err}");
                return 1;
            }
        }
    } else {
        if plan.mismatch.is_mismatch {
            println!(
                "mismatch: {} extra top-tier bases on the other side",
                plan.mismatch.magnitude
            );
        }
        if plan.secure_win {
            println!("secure-win mode");
        }
        for recommendation in &plan.recommendations {
            println!("{recommendation}");
        }
    }

    0
}
