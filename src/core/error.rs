//! Error types.
//!
//! Malformed answers at a prompt are not errors: the console re-asks until it
//! gets an acceptable value. What remains is a closed input stream, I/O
//! failures, and invalid game configuration.

use thiserror::Error;

/// Failure while talking to the player.
#[derive(Error, Debug)]
pub enum InputError {
    /// Standard input reached end of file while a prompt was waiting.
    #[error("input closed while waiting for an answer")]
    Closed,
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Invalid board or dice configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board side must be odd and at least 3, got {0}")]
    InvalidSide(usize),
    #[error("{holes} holes do not fit on a board of {cells} cells")]
    TooManyHoles { holes: usize, cells: usize },
    #[error("maximum die face must be at least 1")]
    InvalidDieFace,
}

/// Anything that can stop a game early.
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = InputError> = std::result::Result<T, E>;
