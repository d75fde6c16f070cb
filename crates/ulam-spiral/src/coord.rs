//! Square-grid coordinates.
//!
//! Screen orientation: `x` grows to the right and `y` grows downward, so a
//! step "up" decrements `y`. Coordinates are signed and relative to the
//! point the spiral walk starts from.

use std::ops::{Add, Neg, Sub};

/// A position on the square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCoord {
    /// Column (grows to the right)
    pub x: i64,
    /// Row (grows downward)
    pub y: i64,
}

impl GridCoord {
    /// Origin of the coordinate system. The walk starts here but never emits it first.
    pub const ORIGIN: Self = Self { x: 0, y: 0 };

    /// The first coordinate the walk emits; sequence index 0 lives here.
    pub const CENTER: Self = Self { x: 1, y: 0 };

    /// Create a new coordinate.
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance: max(|dx|, |dy|).
    pub fn chebyshev_distance(&self, other: &Self) -> u64 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }

    /// Ring number around [`GridCoord::CENTER`] (0 = center cell).
    pub fn ring(&self) -> u64 {
        self.chebyshev_distance(&Self::CENTER)
    }

    /// Move one unit in `direction`.
    #[inline]
    pub fn step(self, direction: Direction) -> Self {
        self + direction.offset()
    }
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for GridCoord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl std::fmt::Display for GridCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Walk directions, in the order the spiral turns through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    #[default]
    Right,
    Up,
    Left,
    Down,
}

impl Direction {
    /// The turn cycle: right, up, left, down.
    pub const CYCLE: [Self; 4] = [Self::Right, Self::Up, Self::Left, Self::Down];

    /// Unit offset for one step.
    pub const fn offset(self) -> GridCoord {
        match self {
            Self::Right => GridCoord::new(1, 0),
            Self::Up => GridCoord::new(0, -1),
            Self::Left => GridCoord::new(-1, 0),
            Self::Down => GridCoord::new(0, 1),
        }
    }

    /// Next direction in the cycle (counter-clockwise on screen).
    pub const fn turn(self) -> Self {
        match self {
            Self::Right => Self::Up,
            Self::Up => Self::Left,
            Self::Left => Self::Down,
            Self::Down => Self::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_is_one_step_right_of_origin() {
        assert_eq!(GridCoord::ORIGIN.step(Direction::Right), GridCoord::CENTER);
        assert_eq!(GridCoord::CENTER.ring(), 0);
        assert_eq!(GridCoord::ORIGIN.ring(), 1);
    }

    #[test]
    fn up_decrements_y() {
        assert_eq!(GridCoord::ORIGIN.step(Direction::Up), GridCoord::new(0, -1));
        assert_eq!(GridCoord::ORIGIN.step(Direction::Down), GridCoord::new(0, 1));
    }

    #[test]
    fn turn_cycles_through_all_four() {
        let mut dir = Direction::Right;
        for expected in Direction::CYCLE.iter().cycle().skip(1).take(8) {
            dir = dir.turn();
            assert_eq!(dir, *expected);
        }
    }

    #[test]
    fn opposite_offsets_cancel() {
        let sum = Direction::CYCLE
            .iter()
            .fold(GridCoord::ORIGIN, |acc, d| acc.step(*d));
        assert_eq!(sum, GridCoord::ORIGIN);
    }

    #[test]
    fn chebyshev_distance() {
        let a = GridCoord::new(-2, 3);
        let b = GridCoord::new(1, 1);
        assert_eq!(a.chebyshev_distance(&b), 3);
        assert_eq!(b.chebyshev_distance(&a), 3);
    }

    #[test]
    fn chebyshev_distance_at_extremes() {
        let low = GridCoord::new(i64::MIN, 0);
        let high = GridCoord::new(i64::MAX, 0);
        assert_eq!(low.chebyshev_distance(&high), u64::MAX);
        assert_eq!(low.ring(), i64::MAX as u64 + 2);
        assert_eq!(GridCoord::new(0, i64::MIN).ring(), 1 << 63);
    }

    #[test]
    fn addition_subtraction() {
        let a = GridCoord::new(1, 2);
        let b = GridCoord::new(4, -1);

        assert_eq!(a + b, GridCoord::new(5, 1));
        assert_eq!(a - b, GridCoord::new(-3, 3));
        assert_eq!(a + (-b), a - b);
    }

    #[test]
    fn ordering_is_x_then_y() {
        assert!(GridCoord::new(0, 5) < GridCoord::new(1, -5));
    }
}
