//! Territory War - Entry Point
//!
//! Sets up logging, loads the territory table, optionally lets the player
//! register the territories by hand, and runs the console game loop.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use territory_war::console::{register_territories, Console, Session};
use territory_war::core::{GameConfig, Result};
use territory_war::games::war::WarGameBuilder;

const DEFAULT_LOG_FILTER: &str = "territory_war=warn";

/// Turn-based territory conquest on the console
#[derive(Parser, Debug)]
#[command(name = "territory-war")]
#[command(about = "Conquer territories with dice battles until your mission is complete")]
struct Args {
    /// Random seed for deterministic games
    #[arg(long)]
    seed: Option<u64>,

    /// TOML file with factions, territories and missions
    #[arg(long)]
    config: Option<PathBuf>,

    /// Type in every territory instead of using the configured table
    #[arg(long)]
    register: bool,

    /// Play this mission instead of drawing one
    #[arg(long)]
    mission: Option<usize>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "game aborted");
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut console = Console::new(io::stdin().lock(), io::stdout());
    console.println("=== TERRITORY WAR ===")?;

    let mut builder = WarGameBuilder::new();
    if args.register {
        let territories = register_territories(&mut console, &config)?;
        builder = builder.territories(territories);
    }
    if let Some(seed) = args.seed {
        builder = builder.seed(seed);
    }
    if let Some(index) = args.mission {
        builder = builder.mission(index);
    }

    let (game, state) = builder.config(config).build()?;

    let mut session = Session::new(game, state, console);
    session.run()?;

    Ok(())
}
