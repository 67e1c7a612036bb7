//! Foundational primitives for intensity-grid contour tracing.
//!
//! ## Grids and Row Pitch
//! Grids are row-major and indexed by `(row, col)`. A [`GridView`] carries a
//! row pitch in elements that may exceed `cols`, so a padded frame buffer is
//! borrowed as-is.
//!
//! ## Coordinates
//! [`Coord`] uses signed components so that a walk can describe a probe one
//! step past an edge. Ordering is lexicographic by `(row, col)`, i.e. the
//! row-major scan order.
//!
//! ## Moore Neighborhood
//! [`MOORE_OFFSETS`] is the single canonical 8-neighbor table. Directions are
//! indices into it: clockwise (rows grow downward) starting at West. The order
//! decides which neighbor wins when several match, so it is part of the API.

mod coord;
mod error;
mod grid;
mod neighbors;

pub use coord::{Coord, Dims};
pub use error::Error;
pub use grid::{Grid, GridView};
pub use neighbors::{
    DIR_E, DIR_N, DIR_NE, DIR_NW, DIR_S, DIR_SE, DIR_SW, DIR_W, MOORE_OFFSETS, backtrack_after,
    direction_between, neighbors, neighbors_from, step,
};
