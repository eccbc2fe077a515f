//! Static spiral path numbering.
//!
//! The path starts at the top-left corner and winds clockwise inward, so the
//! highest number sits on the center cell:
//!
//! ```text
//!  1  2  3  4  5
//! 16 17 18 19  6
//! 15 24 25 20  7
//! 14 23 22 21  8
//! 13 12 11 10  9
//! ```

/// Cell coordinate, 0-based `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The numbered path over a square board.
///
/// Labels are 1-based and run from 1 to `side * side`. The mapping is a
/// bijection between labels and cells, stored both ways for O(1) lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathLayout {
    side: usize,
    /// Row-major label of each cell.
    labels: Vec<u32>,
    /// Cell of each label, indexed by `label - 1`.
    cells: Vec<Coord>,
}

impl PathLayout {
    /// Build the clockwise inward spiral for a board of `side × side`.
    #[must_use]
    pub fn spiral(side: usize) -> Self {
        let count = side * side;
        let mut labels = vec![0u32; count];
        let mut cells = Vec::with_capacity(count);

        let mut place = |row: usize, col: usize| {
            cells.push(Coord::new(row, col));
            labels[row * side + col] = cells.len() as u32;
        };

        if side > 0 {
            let (mut top, mut bottom, mut left, mut right) = (0, side - 1, 0, side - 1);

            while top <= bottom && left <= right {
                for col in left..=right {
                    place(top, col);
                }
                for row in top + 1..=bottom {
                    place(row, right);
                }
                if top < bottom {
                    for col in (left..right).rev() {
                        place(bottom, col);
                    }
                }
                if left < right {
                    for row in (top + 1..bottom).rev() {
                        place(row, left);
                    }
                }

                if bottom == 0 || right == 0 {
                    break;
                }
                top += 1;
                left += 1;
                bottom -= 1;
                right -= 1;
            }
        }

        Self { side, labels, cells }
    }

    /// Side length of the board.
    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Highest label on the path.
    #[must_use]
    pub fn last_label(&self) -> u32 {
        self.cells.len() as u32
    }

    /// Cell carrying the highest label.
    ///
    /// For odd sides this is the geometric center.
    #[must_use]
    pub fn end(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    /// Label of a cell.
    #[must_use]
    pub fn label_at(&self, coord: Coord) -> u32 {
        self.labels[coord.row * self.side + coord.col]
    }

    /// Cell carrying `label`, if the label is on the path.
    #[must_use]
    pub fn coord_of(&self, label: u32) -> Option<Coord> {
        let index = (label as usize).checked_sub(1)?;
        self.cells.get(index).copied()
    }

    /// Labels of one row, left to right.
    pub fn row_labels(&self, row: usize) -> &[u32] {
        &self.labels[row * self.side..(row + 1) * self.side]
    }
}
