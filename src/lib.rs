//! # funny-bunny
//!
//! Seeded, console-driven board games.
//!
//! ## Games
//!
//! - **Funny bunny**: hop along a spiral path to the carrot, avoiding holes
//! - **Cryptogram**: break a letter-substitution cipher one letter at a time
//! - **Mölkky**: score exactly 50 points by knocking over skittles
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: every game is a value owned by its caller. There is
//!    no global state.
//!
//! 2. **Injected randomness**: all random decisions go through
//!    `RandomSource`. Production code uses the seeded `GameRng`, tests replay
//!    fixed draws with `ScriptedRng`.
//!
//! 3. **Forgiving input**: malformed answers re-prompt instead of failing.
//!
//! ## Modules
//!
//! - `core`: RNG, console, configuration, errors
//! - `board`: spiral path layout and the marker overlay
//! - `rules`: move resolution and the per-turn throw
//! - `games`: the playable games

pub mod board;
pub mod core;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, ConfigError, Console, GameError, GameRng, GameRngState, InputError,
    RandomSource, ScriptedRng,
};

pub use crate::board::{Board, Coord, Marker, PathLayout};

pub use crate::rules::{resolve_move, Dice, Position};

pub use crate::games::funny_bunny::{FunnyBunny, Turn, TurnOutcome};
