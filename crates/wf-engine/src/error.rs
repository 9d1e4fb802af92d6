//! Error types for the game engine.
//!
//! Dying is not an error: it is reported as a [`crate::GameOutcome`]. These
//! variants cover faults that stop a run from being played at all.

use thiserror::Error;

use crate::event::EventKind;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur while setting up or playing a run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// The input stream ended while the game was waiting for the player.
    #[error("input closed before the game finished")]
    InputClosed,

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// More levels were requested than a world may hold.
    #[error("cannot build world: {requested} levels requested, at most {max} supported")]
    TooManyLevels {
        /// Requested level count.
        requested: usize,
        /// Largest supported level count.
        max: usize,
    },

    /// Levels were requested but one of the event pools is empty.
    #[error("cannot build world: the {0} pool is empty")]
    EmptyPool(EventKind),
}
