//! Board geometry and overlay.
//!
//! - `layout`: the static spiral numbering (`PathLayout`, `Coord`)
//! - `grid`: the per-cell markers drawn over it (`Board`, `Marker`)

pub mod grid;
pub mod layout;

pub use grid::{Board, Marker};
pub use layout::{Coord, PathLayout};
