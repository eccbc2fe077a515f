//! "Funny bunny": hop a bunny along a spiral to the carrot.
//!
//! - The board is 5×5, numbered 1..=25 along a clockwise inward spiral
//! - Six hole draws are made at setup; the center is always the carrot
//! - Each turn the player declares a limit (1-6) and a throw is drawn
//! - Falling into a hole sends the bunny back off the board
//! - Reaching or passing 25 wins

mod game;

pub use game::{play, FunnyBunny, Turn, TurnOutcome, FELL_INTO_HOLE, SEED_PROMPT, WELCOME};
