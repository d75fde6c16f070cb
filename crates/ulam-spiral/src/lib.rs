//! Ulam Spiral Coordinates
//!
//! Lays a linear sequence out on a square spiral and classifies integers by
//! primality, the two pieces of arithmetic behind an Ulam spiral.
//!
//! # Coordinate System
//!
//! Screen orientation: `x` to the right, `y` downward. The walk starts at the
//! origin `(0, 0)` and steps once before emitting, so sequence index 0 sits at
//! `(1, 0)`, the spiral's center cell. Existing layouts depend on that
//! placement.
//!
//! # Rings
//!
//! Ring k around the center holds 8k cells; rings 0..=k hold `(2k+1)²`.
//! The stateful [`SpiralWalk`] and the closed-form [`spiral_to_coord`] emit
//! identical coordinates.

mod coord;
mod error;
mod prime;
mod spiral;

pub use coord::{Direction, GridCoord};
pub use error::{Error, Result};
pub use prime::is_prime;
pub use spiral::{
    cells_in_ring, coord_to_spiral, spiral_to_coord, total_cells_through, SpiralIndex, SpiralWalk,
    MAX_RING,
};

/// Cells in the first ring around the center.
pub const FIRST_RING_CELLS: u64 = 8;

// Ring k holds 8k cells
const _: () = assert!(cells_in_ring(1) == FIRST_RING_CELLS);
const _: () = assert!(total_cells_through(1) == 1 + FIRST_RING_CELLS);
