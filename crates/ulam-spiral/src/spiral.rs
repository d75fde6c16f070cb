//! Square spiral enumeration.
//!
//! The walk starts at [`GridCoord::ORIGIN`] and takes one unit step before
//! emitting anything, so sequence index 0 lands on [`GridCoord::CENTER`]
//! `(1, 0)`. From there it winds counter-clockwise on screen:
//! 1 right, 1 up, 2 left, 2 down, 3 right, 3 up, 4 left, 4 down, ...
//!
//! # Ring Structure
//!
//! Rings are measured as Chebyshev distance from the center cell:
//!
//! - Ring 0: just the center (1 cell)
//! - Ring k > 0: 8k cells, indices `(2k-1)²` through `(2k+1)² - 1`
//!
//! Ring k is entered at `CENTER + (k, k-1)`, climbs the right edge, then runs
//! along the top, left and bottom edges, ending on the bottom-right corner.
//!
//! [`SpiralWalk`] is the stateful leg-and-turn walk. [`spiral_to_coord`] and
//! [`coord_to_spiral`] are the closed-form bijection and agree with it.

use crate::{Direction, GridCoord};

/// Position of an element in the sequence being laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpiralIndex(pub u64);

impl SpiralIndex {
    /// The center cell.
    pub const CENTER: Self = Self(0);

    /// Create from raw index.
    #[inline]
    pub const fn new(index: u64) -> Self {
        Self(index)
    }

    /// Get the raw index value.
    #[inline]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Determine which ring this index falls in.
    ///
    /// Ring 0: index 0
    /// Ring 1: indices 1-8
    /// Ring 2: indices 9-24
    /// Ring k: indices from `(2k-1)²` to `(2k+1)² - 1`
    pub fn ring(&self) -> u64 {
        (isqrt(self.0) + 1) / 2
    }

    /// Offset within the ring (0 to 8k-1 for ring k > 0).
    pub fn offset_in_ring(&self) -> u64 {
        let ring = self.ring();
        if ring == 0 {
            return 0;
        }
        self.0 - total_cells_through(ring - 1)
    }
}

impl From<u64> for SpiralIndex {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<SpiralIndex> for u64 {
    fn from(value: SpiralIndex) -> Self {
        value.0
    }
}

/// Number of cells in ring k.
///
/// - Ring 0: 1 cell
/// - Ring k > 0: 8k cells
#[inline]
pub const fn cells_in_ring(ring: u64) -> u64 {
    if ring == 0 {
        1
    } else {
        8 * ring
    }
}

/// Total cells through ring k (inclusive): `(2k+1)²`.
#[inline]
pub const fn total_cells_through(ring: u64) -> u64 {
    let side = 2 * ring + 1;
    side * side
}

/// Outermost ring whose indices fit in a `u64`.
///
/// [`coord_to_spiral`] returns `None` for coordinates beyond it.
pub const MAX_RING: u64 = (u32::MAX as u64 - 1) / 2;

/// Integer square root, exact for the whole `u64` range.
fn isqrt(n: u64) -> u64 {
    let mut root = (n as f64).sqrt() as u64;
    while root > 0 && root.checked_mul(root).map_or(true, |sq| sq > n) {
        root -= 1;
    }
    while (root + 1).checked_mul(root + 1).is_some_and(|sq| sq <= n) {
        root += 1;
    }
    root
}

/// The stateful leg-and-turn spiral walk.
///
/// Yields one coordinate per sequence element. Every leg boundary after the
/// first turns the walk; the leg length grows on every second boundary.
#[derive(Debug, Clone)]
pub struct SpiralWalk {
    position: GridCoord,
    direction: Direction,
    leg_length: u64,
    leg_step: u64,
    boundaries: u64,
    emitted: u64,
    limit: Option<u64>,
}

impl SpiralWalk {
    /// Create an unbounded walk.
    pub fn new() -> Self {
        Self {
            position: GridCoord::ORIGIN,
            direction: Direction::Right,
            leg_length: 1,
            leg_step: 0,
            boundaries: 0,
            emitted: 0,
            limit: None,
        }
    }

    /// Create a walk that yields exactly `count` coordinates.
    pub fn take_cells(count: u64) -> Self {
        Self {
            limit: Some(count),
            ..Self::new()
        }
    }

    /// Current heading.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Number of coordinates emitted so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    fn advance(&mut self) -> GridCoord {
        if self.leg_step == self.leg_length {
            if self.leg_length > 1 {
                self.direction = self.direction.turn();
            }
            self.leg_step = 2;
            if self.boundaries % 2 == 0 {
                self.leg_length += 1;
            }
            self.boundaries += 1;
        } else {
            self.leg_step += 1;
        }

        self.position = self.position.step(self.direction);
        self.emitted += 1;
        self.position
    }
}

impl Default for SpiralWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for SpiralWalk {
    type Item = GridCoord;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(limit) = self.limit {
            if self.emitted >= limit {
                return None;
            }
        }
        Some(self.advance())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.limit {
            Some(limit) => {
                let remaining = limit.saturating_sub(self.emitted);
                (remaining as usize, Some(remaining as usize))
            }
            None => (usize::MAX, None),
        }
    }
}

/// Convert a spiral index to its grid coordinate.
pub fn spiral_to_coord(index: SpiralIndex) -> GridCoord {
    let ring = index.ring();
    if ring == 0 {
        return GridCoord::CENTER;
    }

    let k = ring as i64;
    let offset = index.offset_in_ring() as i64;

    let relative = if offset < 2 * k {
        // Right edge, climbing
        GridCoord::new(k, k - 1 - offset)
    } else if offset < 4 * k {
        // Top edge, heading left
        GridCoord::new(k - (offset - (2 * k - 1)), -k)
    } else if offset < 6 * k {
        // Left edge, descending
        GridCoord::new(-k, -k + (offset - (4 * k - 1)))
    } else {
        // Bottom edge, heading right
        GridCoord::new(-k + (offset - (6 * k - 1)), k)
    };

    GridCoord::CENTER + relative
}

/// Convert a grid coordinate to its spiral index.
///
/// Inverse of [`spiral_to_coord`]. `None` when the coordinate lies beyond
/// [`MAX_RING`].
pub fn coord_to_spiral(coord: GridCoord) -> Option<SpiralIndex> {
    let ring = coord.ring();
    if ring == 0 {
        return Some(SpiralIndex::CENTER);
    }
    if ring > MAX_RING {
        return None;
    }

    // |rel.x|, |rel.y| <= ring, so nothing below can overflow
    let rel = GridCoord::new(coord.x.checked_sub(1)?, coord.y);
    let k = ring as i64;

    let offset = if rel.x == k && rel.y < k {
        k - 1 - rel.y
    } else if rel.y == -k {
        2 * k - 1 + (k - rel.x)
    } else if rel.x == -k {
        4 * k - 1 + (rel.y + k)
    } else {
        6 * k - 1 + (rel.x + k)
    };

    Some(SpiralIndex(total_cells_through(ring - 1) + offset as u64))
}
