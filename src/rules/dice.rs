//! The per-turn throw.
//!
//! The player first declares the largest value the throw may take, then the
//! throw is drawn uniformly between 1 and that value.

use std::io::{BufRead, Write};

use crate::core::{BoardConfig, Console, RandomSource, Result};

/// Prompt asking for the throw limit.
pub const MAX_THROW_PROMPT: &str = "Enter the maximum value for the move:";

/// A die whose player-declared limit is capped at `max_face`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dice {
    max_face: u32,
}

impl Dice {
    #[must_use]
    pub fn new(max_face: u32) -> Self {
        assert!(max_face >= 1, "A die needs at least one face");
        Self { max_face }
    }

    #[must_use]
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.max_die_face)
    }

    #[must_use]
    pub fn max_face(&self) -> u32 {
        self.max_face
    }

    /// Message shown when the declared limit is out of range.
    #[must_use]
    pub fn out_of_range_message(&self) -> String {
        format!("The value must be between 1 and {}!", self.max_face)
    }

    /// Ask for the limit, then throw.
    ///
    /// The limit is asked again until it lies in `1..=max_face`; the answer
    /// is read as a signed number so negative values get the range message.
    pub fn draw<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        rng: &mut impl RandomSource,
    ) -> Result<u32> {
        let limit: i64 = console.prompt_int_in_range(
            MAX_THROW_PROMPT,
            1..=i64::from(self.max_face),
            &self.out_of_range_message(),
        )?;

        let throw = rng.gen_inclusive(1, limit as u32);
        log::debug!("throw {throw} (limit {limit})");
        console.say(format!("You got a {throw}!"))?;

        Ok(throw)
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new(6)
    }
}
