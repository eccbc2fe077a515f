//! Board overlay: the marker shown on every cell.

use std::fmt;
use std::ops::Index;

use smallvec::SmallVec;

use super::layout::{Coord, PathLayout};
use crate::core::{BoardConfig, ConfigError, RandomSource};

/// Symbol drawn on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Open path.
    Step,
    /// A hole the bunny falls into.
    Hole,
    /// The goal.
    Carrot,
    /// The bunny itself. Only ever shown for a single render.
    Bunny,
}

impl Marker {
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Marker::Step => 'o',
            Marker::Hole => 'x',
            Marker::Carrot => 'Y',
            Marker::Bunny => 'B',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The game board: a static spiral path plus a marker per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    layout: PathLayout,
    /// Row-major markers.
    markers: Vec<Marker>,
    /// Every hole draw in order, duplicates included.
    hole_draws: SmallVec<[Coord; 8]>,
}

impl Board {
    /// Set up a fresh board.
    ///
    /// Every cell starts as open path. Then `hole_count` cells are drawn
    /// (row first, then column, each uniform) and marked as holes; a cell
    /// drawn twice simply stays a hole. Finally the center becomes the
    /// carrot, even if a hole was drawn there.
    pub fn generate(config: &BoardConfig, rng: &mut impl RandomSource) -> Result<Self, ConfigError> {
        config.validate()?;

        let layout = PathLayout::spiral(config.side);
        let mut board = Self {
            markers: vec![Marker::Step; config.cell_count()],
            layout,
            hole_draws: SmallVec::new(),
        };

        for _ in 0..config.hole_count {
            let row = rng.gen_index(config.side);
            let col = rng.gen_index(config.side);
            let coord = Coord::new(row, col);

            log::trace!("hole drawn at {coord}");
            board.hole_draws.push(coord);
            board.set(coord, Marker::Hole);
        }

        let goal = board.goal();
        if board.set(goal, Marker::Carrot) == Marker::Hole {
            log::debug!("hole at {goal} covered by the carrot");
        }

        log::debug!(
            "board ready: {} hole draws, {} distinct holes",
            board.hole_draws.len(),
            board.hole_cells().len()
        );

        Ok(board)
    }

    /// The static path numbering.
    #[must_use]
    pub fn layout(&self) -> &PathLayout {
        &self.layout
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.layout.side()
    }

    /// The carrot cell (board center).
    #[must_use]
    pub fn goal(&self) -> Coord {
        self.layout.end()
    }

    /// Replace the marker on a cell, returning the one that was there.
    pub fn set(&mut self, coord: Coord, marker: Marker) -> Marker {
        let index = self.index_of(coord);
        std::mem::replace(&mut self.markers[index], marker)
    }

    /// Every hole draw made during setup, in order.
    #[must_use]
    pub fn hole_draws(&self) -> &[Coord] {
        &self.hole_draws
    }

    /// Cells currently showing a hole, row-major.
    #[must_use]
    pub fn hole_cells(&self) -> Vec<Coord> {
        self.cells()
            .filter(|&coord| self[coord] == Marker::Hole)
            .collect()
    }

    /// All cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let side = self.side();
        (0..side).flat_map(move |row| (0..side).map(move |col| Coord::new(row, col)))
    }

    /// Render the board as printed to the player.
    ///
    /// One line per row, each marker followed by a space, then an empty line.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn index_of(&self, coord: Coord) -> usize {
        let side = self.side();
        assert!(
            coord.row < side && coord.col < side,
            "Cell {coord} is off a {side}x{side} board"
        );
        coord.row * side + coord.col
    }
}

impl Index<Coord> for Board {
    type Output = Marker;

    fn index(&self, coord: Coord) -> &Marker {
        &self.markers[self.index_of(coord)]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.markers.chunks(self.side()) {
            for marker in row {
                write!(f, "{marker} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
