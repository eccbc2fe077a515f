//! Move resolution along the spiral path.

use crate::board::{Coord, PathLayout};

/// Where the bunny is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Position {
    /// Not on the board yet, or just fell into a hole. Counts as path label 0.
    #[default]
    OffBoard,
    /// Standing on a cell.
    On(Coord),
}

impl Position {
    /// Path label of the position (0 when off the board).
    #[must_use]
    pub fn label(self, layout: &PathLayout) -> u32 {
        match self {
            Position::OffBoard => 0,
            Position::On(coord) => layout.label_at(coord),
        }
    }

    #[must_use]
    pub fn is_off_board(self) -> bool {
        matches!(self, Position::OffBoard)
    }

    /// The cell, if on the board.
    #[must_use]
    pub fn coord(self) -> Option<Coord> {
        match self {
            Position::OffBoard => None,
            Position::On(coord) => Some(coord),
        }
    }
}

/// Advance `throw` steps along the path from `position`.
///
/// Reaching or passing the last label lands exactly on the goal. The throw
/// is not validated; a zero throw from off the board stays off the board.
#[must_use]
pub fn resolve_move(layout: &PathLayout, position: Position, throw: u32) -> Position {
    let target = position.label(layout).saturating_add(throw);

    if target >= layout.last_label() {
        return Position::On(layout.end());
    }

    match layout.coord_of(target) {
        Some(coord) => Position::On(coord),
        None => Position::OffBoard,
    }
}
