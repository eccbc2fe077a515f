//! Core building blocks shared by every game: RNG, console, configuration, errors.
//!
//! Nothing in here knows about boards, bunnies or ciphers.

pub mod config;
pub mod console;
pub mod error;
pub mod rng;

pub use config::BoardConfig;
pub use console::{Console, NOT_A_NUMBER};
pub use error::{ConfigError, GameError, InputError, Result};
pub use rng::{GameRng, GameRngState, RandomSource, ScriptedRng};
