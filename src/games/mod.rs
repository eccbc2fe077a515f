//! Playable games.
//!
//! Each game is driven through a `Console` and a seeded `RandomSource`.

pub mod cryptogram;
pub mod funny_bunny;
pub mod molkky;
