//! Sparse grid store.
//!
//! Maps `y -> (x -> value)`. Only visited coordinates exist. Rows iterate in
//! ascending `y` and, within a row, cells in ascending `x`, whatever order
//! they were inserted in (the spiral inserts in walk order).

use std::collections::BTreeMap;

use tracing::debug;
use ulam_spiral::{GridCoord, SpiralWalk};

use crate::Sequence;

/// Sparse mapping from coordinate to value.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseGrid<T> {
    rows: BTreeMap<i64, BTreeMap<i64, T>>,
    coords: Vec<GridCoord>,
}

/// Bounding box and widest row of a non-empty grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extents {
    pub first_x: i64,
    pub last_x: i64,
    pub first_y: i64,
    pub last_y: i64,
    /// Populated-cell count of the widest row
    pub max_row_len: usize,
}

impl Extents {
    /// Columns spanned from `first_x` to `last_x`, if that fits a `usize`.
    pub fn width(&self) -> Option<usize> {
        span(self.first_x, self.last_x)
    }

    /// Rows spanned from `first_y` to `last_y`, if that fits a `usize`.
    pub fn height(&self) -> Option<usize> {
        span(self.first_y, self.last_y)
    }
}

fn span(first: i64, last: i64) -> Option<usize> {
    usize::try_from(last.abs_diff(first)).ok()?.checked_add(1)
}

/// One populated row, borrowed from the grid.
#[derive(Debug)]
pub struct GridRow<'g, T> {
    y: i64,
    cells: &'g BTreeMap<i64, T>,
}

impl<T> Clone for GridRow<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for GridRow<'_, T> {}

impl<'g, T> GridRow<'g, T> {
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Populated cells in this row.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Smallest populated `x`.
    pub fn first_x(&self) -> Option<i64> {
        self.cells.keys().next().copied()
    }

    /// Largest populated `x`.
    pub fn last_x(&self) -> Option<i64> {
        self.cells.keys().next_back().copied()
    }

    /// Cells in ascending `x`.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (i64, &'g T)> + 'g {
        self.cells.iter().map(|(&x, value)| (x, value))
    }
}

impl<T> Default for SparseGrid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseGrid<T> {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            coords: Vec::new(),
        }
    }

    /// Lay `sequence` out along the spiral walk.
    pub fn from_sequence(sequence: Sequence<T>) -> Self {
        let mut grid = Self::new();
        grid.rebuild(sequence);
        grid
    }

    /// Discard all cells and lay `sequence` out again from scratch.
    pub fn rebuild(&mut self, sequence: Sequence<T>) {
        self.rows.clear();
        self.coords.clear();
        self.coords.reserve(sequence.len());

        for (value, coord) in sequence.into_iter().zip(SpiralWalk::new()) {
            self.coords.push(coord);
            self.put(coord, value);
        }

        debug!(
            cells = self.coords.len(),
            rows = self.rows.len(),
            extents = ?self.extents(),
            "Built spiral grid"
        );
    }

    /// Insert or overwrite the value at `coord`, returning the old value.
    ///
    /// Cells inserted this way are not added to [`SparseGrid::coords`].
    pub fn put(&mut self, coord: GridCoord, value: T) -> Option<T> {
        self.rows.entry(coord.y).or_default().insert(coord.x, value)
    }

    pub fn get(&self, coord: GridCoord) -> Option<&T> {
        self.rows.get(&coord.y).and_then(|row| row.get(&coord.x))
    }

    /// Coordinate of every sequence index, in sequence order.
    pub fn coords(&self) -> &[GridCoord] {
        &self.coords
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.rows.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of populated rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows in ascending `y`.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = GridRow<'_, T>> + '_ {
        self.rows.iter().map(|(&y, cells)| GridRow { y, cells })
    }

    pub fn row(&self, y: i64) -> Option<GridRow<'_, T>> {
        self.rows.get(&y).map(|cells| GridRow { y, cells })
    }

    /// Smallest populated `x` in row `y`.
    pub fn first_x(&self, y: i64) -> Option<i64> {
        self.row(y).and_then(|row| row.first_x())
    }

    /// Largest populated `x` in row `y`.
    pub fn last_x(&self, y: i64) -> Option<i64> {
        self.row(y).and_then(|row| row.last_x())
    }

    /// Cells in row-major order: ascending `y`, then ascending `x`.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, &T)> + '_ {
        self.rows.iter().flat_map(|(&y, cells)| {
            cells
                .iter()
                .map(move |(&x, value)| (GridCoord::new(x, y), value))
        })
    }

    /// Global bounds across all rows, or `None` for an empty grid.
    pub fn extents(&self) -> Option<Extents> {
        let first_y = *self.rows.keys().next()?;
        let last_y = *self.rows.keys().next_back()?;

        let mut first_x = i64::MAX;
        let mut last_x = i64::MIN;
        let mut max_row_len = 0;
        for row in self.rows() {
            if let (Some(lo), Some(hi)) = (row.first_x(), row.last_x()) {
                first_x = first_x.min(lo);
                last_x = last_x.max(hi);
            }
            max_row_len = max_row_len.max(row.len());
        }

        Some(Extents {
            first_x,
            last_x,
            first_y,
            last_y,
            max_row_len,
        })
    }
}

/// Lay `sequence` out on the spiral.
pub fn build_grid<T>(sequence: Sequence<T>) -> SparseGrid<T> {
    SparseGrid::from_sequence(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    fn grid_of(n: i64) -> SparseGrid<Value> {
        build_grid(Sequence::range(1, n).unwrap())
    }

    #[test]
    fn first_nine_form_a_square() {
        let grid = grid_of(9);
        let rows: Vec<Vec<i64>> = grid
            .rows()
            .map(|row| {
                row.iter()
                    .map(|(_, v)| match v {
                        Value::Int(n) => *n,
                        _ => unreachable!(),
                    })
                    .collect()
            })
            .collect();
        assert_eq!(rows, vec![vec![5, 4, 3], vec![6, 1, 2], vec![7, 8, 9]]);
    }

    #[test]
    fn rows_ascend_in_y_and_x() {
        let grid = grid_of(200);
        let ys: Vec<i64> = grid.rows().map(|r| r.y()).collect();
        assert!(ys.windows(2).all(|w| w[0] < w[1]));
        for row in grid.rows() {
            let xs: Vec<i64> = row.iter().map(|(x, _)| x).collect();
            assert!(xs.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn first_value_sits_at_center() {
        let grid = grid_of(3);
        assert_eq!(grid.get(GridCoord::CENTER), Some(&Value::Int(1)));
        assert_eq!(grid.get(GridCoord::ORIGIN), None);
        assert_eq!(grid.coords()[0], GridCoord::CENTER);
    }

    #[test]
    fn coords_follow_sequence_order() {
        let grid = grid_of(25);
        assert_eq!(grid.coords().len(), 25);
        for (i, coord) in grid.coords().iter().enumerate() {
            assert_eq!(grid.get(*coord), Some(&Value::Int(i as i64 + 1)));
        }
    }

    #[test]
    fn row_extents() {
        // 13 starts a new top row at the far right.
        let grid = grid_of(13);
        assert_eq!(grid.first_x(-2), Some(3));
        assert_eq!(grid.last_x(-2), Some(3));
        assert_eq!(grid.first_x(1), Some(0));
        assert_eq!(grid.last_x(1), Some(3));
        assert_eq!(grid.first_x(7), None);

        let extents = grid.extents().unwrap();
        assert_eq!((extents.first_x, extents.last_x), (0, 3));
        assert_eq!((extents.first_y, extents.last_y), (-2, 1));
        assert_eq!(extents.max_row_len, 4);
        assert_eq!(extents.width(), Some(4));
        assert_eq!(extents.height(), Some(4));
    }

    #[test]
    fn twenty_five_spans_five_columns() {
        let extents = grid_of(25).extents().unwrap();
        assert_eq!((extents.first_x, extents.last_x), (-1, 3));
        assert_eq!(extents.width(), Some(5));
        assert_eq!(extents.height(), Some(5));
        assert_eq!(extents.max_row_len, 5);
    }

    #[test]
    fn rebuild_clears_previous_state() {
        let mut grid = grid_of(50);
        grid.rebuild(Sequence::range(100, 102).unwrap());
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.coords().len(), 3);
        assert_eq!(grid.get(GridCoord::CENTER), Some(&Value::Int(100)));

        // Idempotent
        let again = build_grid(Sequence::range(100, 102).unwrap());
        assert_eq!(grid, again);
    }

    #[test]
    fn put_overwrites() {
        let mut grid = SparseGrid::new();
        assert_eq!(grid.put(GridCoord::new(4, 4), "a"), None);
        assert_eq!(grid.put(GridCoord::new(4, 4), "b"), Some("a"));
        assert_eq!(grid.len(), 1);
        assert!(grid.coords().is_empty());
    }

    #[test]
    fn extents_span_the_full_i64_range() {
        let mut grid = SparseGrid::new();
        grid.put(GridCoord::new(i64::MIN, 0), 1);
        grid.put(GridCoord::new(i64::MAX, 0), 2);

        let extents = grid.extents().unwrap();
        assert_eq!((extents.first_x, extents.last_x), (i64::MIN, i64::MAX));
        assert_eq!(extents.width(), None);
        assert_eq!(extents.height(), Some(1));
    }

    #[test]
    fn empty_grid_has_no_extents() {
        let grid: SparseGrid<i64> = SparseGrid::new();
        assert!(grid.is_empty());
        assert_eq!(grid.extents(), None);
        assert_eq!(grid.rows().count(), 0);
    }

    #[test]
    fn iter_is_row_major() {
        let grid = grid_of(9);
        let coords: Vec<GridCoord> = grid.iter().map(|(c, _)| c).collect();
        assert_eq!(coords[0], GridCoord::new(0, -1));
        assert_eq!(coords[8], GridCoord::new(2, 1));
    }
}
