//! Board and dice configuration.
//!
//! The standard game is a 5×5 board with 6 holes and a die of at most 6
//! faces. Other odd board sides work too: the spiral path is generated, not
//! hardcoded.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Configuration for a funny bunny game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Side length of the square board. Must be odd so there is a center cell.
    pub side: usize,

    /// Number of hole draws at setup.
    /// Draws may land on the same cell, so the board can end up with fewer.
    pub hole_count: usize,

    /// Largest maximum the player may declare for a throw.
    pub max_die_face: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            side: 5,
            hole_count: 6,
            max_die_face: 6,
        }
    }
}

impl BoardConfig {
    /// Set a custom board side.
    pub fn with_side(mut self, side: usize) -> Self {
        self.side = side;
        self
    }

    /// Set a custom number of hole draws.
    pub fn with_hole_count(mut self, count: usize) -> Self {
        self.hole_count = count;
        self
    }

    /// Set a custom die limit.
    pub fn with_max_die_face(mut self, face: u32) -> Self {
        self.max_die_face = face;
        self
    }

    /// Total number of cells on the board.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.side * self.side
    }

    /// Check that a board can be built from this configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.side < 3 || self.side % 2 == 0 {
            return Err(ConfigError::InvalidSide(self.side));
        }
        if self.hole_count >= self.cell_count() {
            return Err(ConfigError::TooManyHoles {
                holes: self.hole_count,
                cells: self.cell_count(),
            });
        }
        if self.max_die_face == 0 {
            return Err(ConfigError::InvalidDieFace);
        }
        Ok(())
    }
}
