use std::collections::TryReserveError;

use thiserror::Error;

/// Fatal errors. Crashing into a wall or into the snake itself is gameplay, not an error.
#[derive(Error, Debug)]
pub enum GameError {
    #[error("Failed to allocate {count} ring slots: {source}")]
    Allocation {
        count: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("Ring buffer needs at least one slot")]
    EmptyRing,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid snake layout: {0}")]
    Layout(String),

    #[error("Impossible game state: {0}")]
    Invariant(String),

    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
