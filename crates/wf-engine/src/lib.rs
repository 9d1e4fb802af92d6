//! Game engine for Wayfarer, a turn-based text adventure.
//!
//! A run is a fixed number of levels. Before the first level the
//! [`World`] draws one event per level from four equally likely pools (items,
//! enemies, traps, rest spots). Each level the [`Game`] pops the next event,
//! lets the player look around, then applies it to the hero. Enemy events
//! hand off to a turn-based [`Battle`]. All player interaction goes through
//! the [`Console`] trait.

pub mod battle;
pub mod config;
pub mod console;
pub mod error;
pub mod event;
pub mod game;
pub mod world;

pub use battle::{Battle, BattleOutcome, BattleState, RoundReport};
pub use config::GameConfig;
pub use console::{Console, ScriptedConsole, StreamConsole};
pub use error::{EngineError, EngineResult};
pub use event::{DeathCause, Event, EventKind, EventOutcome, drop_item};
pub use game::{Game, GameOutcome, MenuChoice};
pub use world::{EventPools, MAX_LEVELS, World};
