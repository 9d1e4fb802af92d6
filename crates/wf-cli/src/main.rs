//! CLI frontend for the Wayfarer text adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "wf",
    about = "Wayfarer — a turn-based text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log engine decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new run
    Play {
        /// Number of levels to survive
        #[arg(short, long, default_value = "40")]
        levels: usize,

        /// RNG seed for a reproducible world (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Pause after each message, in milliseconds (0 disables)
        #[arg(long, default_value = "1000")]
        pace_ms: u64,

        /// Hero's starting damage
        #[arg(long, default_value = "10")]
        damage: i32,

        /// Hero's starting health
        #[arg(long, default_value = "100")]
        health: i32,

        /// JSON catalog to use instead of the built-in one
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// List every enemy, item, trap, and rest spot
    Catalog {
        /// Print the catalog as JSON (a starting point for custom catalogs)
        #[arg(long)]
        json: bool,

        /// JSON catalog to use instead of the built-in one
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Preview a generated world in play order
    World {
        /// Number of levels
        #[arg(short, long, default_value = "40")]
        levels: usize,

        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// JSON catalog to use instead of the built-in one
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            levels,
            seed,
            pace_ms,
            damage,
            health,
            catalog,
        } => commands::play::run(commands::play::PlayArgs {
            levels,
            seed,
            pace_ms,
            damage,
            health,
            catalog,
        }),
        Commands::Catalog { json, catalog } => {
            commands::catalog::run(catalog.as_deref(), json).map(|()| 0)
        }
        Commands::World {
            levels,
            seed,
            catalog,
        } => commands::world::run(catalog.as_deref(), levels, seed).map(|()| 0),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

/// Send logs to stderr so they never mix with the game text on stdout.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
