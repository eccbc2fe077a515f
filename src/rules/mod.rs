//! Game rules for funny bunny.
//!
//! - `movement`: where a throw takes the bunny along the spiral
//! - `dice`: the validated per-turn throw

pub mod dice;
pub mod movement;

pub use dice::{Dice, MAX_THROW_PROMPT};
pub use movement::{resolve_move, Position};
