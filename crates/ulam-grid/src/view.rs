//! The assembled view handed to renderers.

use std::collections::BTreeMap;

use crate::{Aggregate, CellPos, CounterTally, Layout, Tally, ViewCell};

/// Aggregate values of one counter along one axis.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Header {
    /// Counter id
    pub id: String,
    /// One total per row (row headers) or per column (column headers)
    pub values: Vec<i64>,
}

/// Padded matrix plus per-cell markers and counter headers.
#[derive(Debug, Clone)]
pub struct GridView<'g, T> {
    layout: Layout<'g, T>,
    markers: BTreeMap<CellPos, String>,
    tally: Tally,
}

impl<'g, T> GridView<'g, T> {
    pub fn new(layout: Layout<'g, T>, aggregate: Aggregate) -> Self {
        Self {
            layout,
            markers: aggregate.markers,
            tally: aggregate.tally,
        }
    }

    pub fn layout(&self) -> &Layout<'g, T> {
        &self.layout
    }

    pub fn width(&self) -> usize {
        self.layout.width()
    }

    pub fn height(&self) -> usize {
        self.layout.height()
    }

    /// Cell at render position (`row`, `col`).
    pub fn cell(&self, row: usize, col: usize) -> Option<&ViewCell<'g, T>> {
        self.layout.get(CellPos::new(row, col))
    }

    /// Rows of the padded matrix, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ViewCell<'g, T>]> + '_ {
        self.layout.rows()
    }

    /// Marker label of the cell at `pos`.
    pub fn marker(&self, pos: CellPos) -> Option<&str> {
        self.markers.get(&pos).map(String::as_str)
    }

    pub fn markers(&self) -> &BTreeMap<CellPos, String> {
        &self.markers
    }

    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Per-row totals of every counter that matched, in registration order
    /// (reversed when `reverse` is set).
    pub fn row_headers(&self, reverse: bool) -> Vec<Header> {
        self.headers(reverse, |counter| counter.row_totals(self.height()))
    }

    /// Per-column totals of every counter that matched, in registration
    /// order (reversed when `reverse` is set).
    pub fn col_headers(&self, reverse: bool) -> Vec<Header> {
        self.headers(reverse, |counter| counter.column_totals(self.width()))
    }

    /// Totals of every counter that matched, for a single row.
    pub fn row_header(&self, row: usize, reverse: bool) -> Vec<(&str, i64)> {
        let mut header: Vec<_> = self
            .tally
            .counters()
            .map(|counter| (counter.id(), counter.row_total(row)))
            .collect();
        if reverse {
            header.reverse();
        }
        header
    }

    fn headers(&self, reverse: bool, totals: impl Fn(&CounterTally) -> Vec<i64>) -> Vec<Header> {
        let mut headers: Vec<Header> = self
            .tally
            .counters()
            .map(|counter| Header {
                id: counter.id().to_string(),
                values: totals(counter),
            })
            .collect();
        if reverse {
            headers.reverse();
        }
        headers
    }
}

#[cfg(feature = "serde")]
mod serialize {
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    use super::GridView;
    use crate::CellPos;

    #[derive(serde::Serialize)]
    struct MarkerEntry<'a> {
        #[serde(flatten)]
        pos: CellPos,
        label: &'a str,
    }

    impl<T: Serialize> Serialize for GridView<'_, T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let rows: Vec<_> = self.rows().collect();
            let markers: Vec<_> = self
                .markers
                .iter()
                .map(|(pos, label)| MarkerEntry { pos: *pos, label })
                .collect();

            let mut state = serializer.serialize_struct("GridView", 7)?;
            state.serialize_field("width", &self.width())?;
            state.serialize_field("height", &self.height())?;
            state.serialize_field("counters_mode", &self.tally.mode())?;
            state.serialize_field("rows", &rows)?;
            state.serialize_field("markers", &markers)?;
            state.serialize_field("row_headers", &self.row_headers(false))?;
            state.serialize_field("col_headers", &self.col_headers(false))?;
            state.end()
        }
    }
}
