mod config;
mod controller;
mod datastore;
mod log;
mod model;

use anyhow::{Context, Result};
use clap::Parser;
use dotenv::dotenv;
use tracing::{event, Level};
use tracing_subscriber::EnvFilter;

use config::Config;
use controller::{Command, Outcome};
use datastore::JsonFileStorage;

/// Task tracker cli
#[derive(Parser)]
#[command(name = "task-cli", version, about = "Track short to-do tasks in a local file")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_env().context("unable to load configuration")?;
    let env_filter = EnvFilter::try_from_env(config::LOG_ENV);
    log::setup(env_filter, &config.log);

    event!(
        Level::DEBUG,
        "Starting task-cli {} with store {}",
        env!("CARGO_PKG_VERSION"),
        config.store.path.display()
    );

    let storage = JsonFileStorage::new(&config.store.path);
    let outcome = controller::execute(&storage, cli.command)
        .with_context(|| format!("unable to access {}", config.store.path.display()))?;

    match outcome {
        Outcome::Done(message) | Outcome::Rejected(message) => println!("{}", message),
        Outcome::Listed(tasks) => println!("{}", controller::render::table(&tasks)),
    }
    Ok(())
}

#[cfg(test)]
mod e2e_tests;
