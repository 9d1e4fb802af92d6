use std::io;
use std::path::PathBuf;
use std::time::Duration;

use colored::Colorize;

use wf_core::{Creature, MAX_STAT};
use wf_engine::{DeathCause, EngineError, Game, GameConfig, GameOutcome, StreamConsole};

/// Exit status after surviving every level.
pub const EXIT_VICTORY: i32 = 0;
/// Exit status after dying to a trap.
pub const EXIT_TRAP_DEATH: i32 = 2;
/// Exit status after dying in battle.
pub const EXIT_BATTLE_DEATH: i32 = 3;

pub struct PlayArgs {
    pub levels: usize,
    pub seed: Option<u64>,
    pub pace_ms: u64,
    pub damage: i32,
    pub health: i32,
    pub catalog: Option<PathBuf>,
}

/// Play one run on the terminal. Returns the process exit status.
pub fn run(args: PlayArgs) -> Result<i32, String> {
    for (flag, value) in [("--damage", args.damage), ("--health", args.health)] {
        if !(1..=MAX_STAT).contains(&value) {
            return Err(format!(
                "{flag} must be between 1 and {MAX_STAT}, got {value}"
            ));
        }
    }
    let catalog = super::load_catalog(args.catalog.as_deref())?;

    let mut config = GameConfig::default()
        .with_levels(args.levels)
        .with_hero_stats(args.damage, args.health);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut game = Game::new(&catalog, config).map_err(|e| e.to_string())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = StreamConsole::new(stdin.lock(), stdout.lock())
        .with_pace(Duration::from_millis(args.pace_ms));

    let outcome = game.play(&mut console);
    drop(console);

    match outcome {
        Ok(GameOutcome::Victory { levels }) => {
            println!("\n  {} All {levels} levels survived.", "Victory!".green().bold());
            Ok(EXIT_VICTORY)
        }
        Ok(GameOutcome::Defeat { level, cause }) => {
            println!(
                "\n  {} {} was {cause} on level {level}.",
                "Defeat.".red().bold(),
                game.hero().name()
            );
            Ok(match cause {
                DeathCause::Trap { .. } => EXIT_TRAP_DEATH,
                DeathCause::Battle { .. } => EXIT_BATTLE_DEATH,
            })
        }
        Err(EngineError::InputClosed) => {
            Err("input closed before the run finished; the adventure is abandoned".into())
        }
        Err(e) => Err(e.to_string()),
    }
}
