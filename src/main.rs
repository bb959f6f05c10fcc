use std::{fs, process};

use dioxus_logger::tracing;
use loothound::{
    config::Config,
    error::Error,
    model::{intent::RosterIntent, snapshot::RaidSnapshot},
    roster::RaidRoster,
};

static USAGE: &str = "loothound <snapshot.json> [intents.json]";

fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = dioxus_logger::init(config.log_level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    if let Err(e) = run(&config) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// Loads a snapshot, applies the optional intents and prints the resulting view as JSON.
fn run(config: &Config) -> Result<(), Error> {
    let mut args = std::env::args().skip(1);
    let snapshot_path = args
        .next()
        .ok_or_else(|| Error::UsageError(USAGE.to_string()))?;

    let snapshot: RaidSnapshot = serde_json::from_str(&fs::read_to_string(&snapshot_path)?)?;
    let mut roster = RaidRoster::from_snapshot(snapshot, config.default_groups)?;

    if let Some(intents_path) = args.next() {
        let intents: Vec<RosterIntent> =
            serde_json::from_str(&fs::read_to_string(&intents_path)?)?;
        tracing::debug!("Applying {} intent(s) from {}", intents.len(), intents_path);
        for intent in intents {
            roster.apply(intent)?;
        }
    }

    println!("{}", serde_json::to_string_pretty(&roster.view())?);
    Ok(())
}
