//! Rectangular arena over a sparse grid.
//!
//! Spiral rows are jagged: the outermost, partially walked ring leaves some
//! rows shorter than others. The layout spans every row from the global first
//! `x` to the global last `x` and fills the missing slots with explicit
//! placeholders, so "no data here" is never confused with a real value.

use tracing::{debug, trace};
use ulam_spiral::{coord_to_spiral, GridCoord, SpiralIndex};

use crate::{Error, Result, SparseGrid};

/// Largest padded view [`Layout::assemble`] will allocate, in cells.
///
/// A spiral of `n` values pads to fewer than `n + 2√n + 1` cells; only grids
/// filled by hand through [`SparseGrid::put`] can come near this.
pub const MAX_VIEW_CELLS: usize = 1 << 24;

/// Render-relative position: zero-based row and column of the padded view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One slot of the padded view.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum ViewCell<'g, T> {
    /// Padding: no value was ever placed here.
    Placeholder,
    /// A populated grid cell.
    Data {
        coord: GridCoord,
        /// Position of `coord` along the spiral
        index: SpiralIndex,
        value: &'g T,
    },
}

impl<T> Clone for ViewCell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ViewCell<'_, T> {}

impl<'g, T> ViewCell<'g, T> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ViewCell::Placeholder)
    }

    pub fn value(&self) -> Option<&'g T> {
        match self {
            ViewCell::Placeholder => None,
            ViewCell::Data { value, .. } => Some(value),
        }
    }

    pub fn coord(&self) -> Option<GridCoord> {
        match self {
            ViewCell::Placeholder => None,
            ViewCell::Data { coord, .. } => Some(*coord),
        }
    }

    /// True for the cell holding sequence index 0.
    pub fn is_center(&self) -> bool {
        self.coord() == Some(GridCoord::CENTER)
    }
}

/// Row-major arena of `height × width` cells.
#[derive(Debug, Clone)]
pub struct Layout<'g, T> {
    width: usize,
    height: usize,
    first_x: i64,
    row_ys: Vec<i64>,
    max_row_len: usize,
    placeholders: usize,
    cells: Vec<ViewCell<'g, T>>,
}

impl<'g, T> Layout<'g, T> {
    /// Pad every row of `grid` out to the global `x` range.
    ///
    /// Fails with [`Error::ViewTooLarge`] when the padded rectangle would
    /// exceed [`MAX_VIEW_CELLS`], and with [`Error::OutOfSpiral`] for a
    /// coordinate that has no spiral index.
    pub fn assemble(grid: &'g SparseGrid<T>) -> Result<Self> {
        let Some(extents) = grid.extents() else {
            return Ok(Self {
                width: 0,
                height: 0,
                first_x: 0,
                row_ys: Vec::new(),
                max_row_len: 0,
                placeholders: 0,
                cells: Vec::new(),
            });
        };

        let height = grid.row_count();
        let (width, total) = match extents
            .width()
            .and_then(|width| Some((width, width.checked_mul(height)?)))
        {
            Some((width, total)) if total <= MAX_VIEW_CELLS => (width, total),
            _ => {
                return Err(Error::ViewTooLarge {
                    width: extents.last_x.abs_diff(extents.first_x).saturating_add(1),
                    height: height as u64,
                    limit: MAX_VIEW_CELLS,
                })
            }
        };

        let mut cells = vec![ViewCell::Placeholder; total];
        let mut row_ys = Vec::with_capacity(height);

        for (row_index, row) in grid.rows().enumerate() {
            row_ys.push(row.y());
            let base = row_index * width;
            for (x, value) in row.iter() {
                let coord = GridCoord::new(x, row.y());
                let index = coord_to_spiral(coord).ok_or(Error::OutOfSpiral(coord))?;
                // first_x <= x <= last_x, so the offset is below `width`
                let col = x.abs_diff(extents.first_x) as usize;
                cells[base + col] = ViewCell::Data {
                    coord,
                    index,
                    value,
                };
            }

            if row.len() < width {
                trace!(
                    y = row.y(),
                    left = row.first_x().map_or(0, |x| x.abs_diff(extents.first_x)),
                    right = row.last_x().map_or(0, |x| extents.last_x.abs_diff(x)),
                    "Padded jagged row"
                );
            }
        }

        let placeholders = total - grid.len();
        debug!(
            width,
            height,
            max_row_len = extents.max_row_len,
            placeholders,
            "Assembled padded layout"
        );

        Ok(Self {
            width,
            height,
            first_x: extents.first_x,
            row_ys,
            max_row_len: extents.max_row_len,
            placeholders,
            cells,
        })
    }

    /// Columns in every row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Populated-cell count of the widest row.
    pub fn max_row_len(&self) -> usize {
        self.max_row_len
    }

    /// Number of padding cells inserted.
    pub fn placeholders(&self) -> usize {
        self.placeholders
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, pos: CellPos) -> Option<&ViewCell<'g, T>> {
        if pos.col >= self.width {
            return None;
        }
        self.cells.get(pos.row * self.width + pos.col)
    }

    /// Grid `y` of a view row.
    pub fn y_of(&self, row: usize) -> Option<i64> {
        self.row_ys.get(row).copied()
    }

    /// Grid `x` of a view column.
    pub fn x_of(&self, col: usize) -> Option<i64> {
        if col >= self.width {
            return None;
        }
        i64::try_from(col).ok().and_then(|col| self.first_x.checked_add(col))
    }

    pub fn row(&self, row: usize) -> Option<&[ViewCell<'g, T>]> {
        let start = row.checked_mul(self.width)?;
        self.cells.get(start..start + self.width)
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ViewCell<'g, T>]> + '_ {
        // chunks(0) panics
        self.cells.chunks(self.width.max(1))
    }

    /// Every slot with its position, row-major.
    pub fn positions(&self) -> impl Iterator<Item = (CellPos, &ViewCell<'g, T>)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (CellPos::new(i / width, i % width), cell))
    }
}
