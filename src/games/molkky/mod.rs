//! Mölkky: knock over numbered skittles to reach exactly 50 points.
//!
//! - One skittle down scores its number; several score how many fell
//! - Going over 50 drops the score back to 25
//! - The first player on exactly 50 wins

mod game;
mod scoring;

pub use game::{play, Molkky, Player};
pub use scoring::{add_points, parse_knocked, points, Knocked, SkittleError, RESET_SCORE, SKITTLE_COUNT, WINNING_SCORE};
