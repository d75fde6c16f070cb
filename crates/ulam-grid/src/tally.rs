//! Counter accumulators.
//!
//! A counter gets its accumulator the first time its predicate matches a
//! cell, and one entry per matched cell; untouched cells read as 0. Counters
//! that never matched do not appear at all.

use std::collections::BTreeMap;

use crate::{CellPos, CellValue, CountersMode};

/// Per-cell accumulators of a single counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterTally {
    id: String,
    cells: BTreeMap<CellPos, i64>,
}

impl CounterTally {
    fn new(id: String) -> Self {
        Self {
            id,
            cells: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Accumulated value at `pos` (0 if never matched).
    pub fn get(&self, pos: CellPos) -> i64 {
        self.cells.get(&pos).copied().unwrap_or(0)
    }

    /// Cells the predicate matched.
    pub fn hits(&self) -> usize {
        self.cells.len()
    }

    /// Sum over the whole grid.
    pub fn total(&self) -> i64 {
        self.cells.values().sum()
    }

    /// Sum across every column of `row`.
    pub fn row_total(&self, row: usize) -> i64 {
        self.cells
            .range(CellPos::new(row, 0)..=CellPos::new(row, usize::MAX))
            .map(|(_, v)| v)
            .sum()
    }

    /// Sum across every row of `col`.
    pub fn column_total(&self, col: usize) -> i64 {
        self.cells
            .iter()
            .filter(|(pos, _)| pos.col == col)
            .map(|(_, v)| v)
            .sum()
    }

    /// Totals of rows `0..height` in one pass.
    pub fn row_totals(&self, height: usize) -> Vec<i64> {
        self.totals(height, |pos| pos.row)
    }

    /// Totals of columns `0..width` in one pass.
    pub fn column_totals(&self, width: usize) -> Vec<i64> {
        self.totals(width, |pos| pos.col)
    }

    fn totals(&self, len: usize, axis: impl Fn(&CellPos) -> usize) -> Vec<i64> {
        let mut totals = vec![0i64; len];
        for (pos, value) in &self.cells {
            if let Some(total) = totals.get_mut(axis(pos)) {
                *total = total.saturating_add(*value);
            }
        }
        totals
    }

    fn record(&mut self, mode: CountersMode, pos: CellPos, amount: i64) {
        let slot = self.cells.entry(pos).or_insert(0);
        match mode {
            CountersMode::Count => *slot = 1,
            CountersMode::Sum => *slot = slot.saturating_add(amount),
        }
    }
}

/// Accumulators of the counters that matched at least once, in
/// registration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    mode: CountersMode,
    slots: Vec<Option<CounterTally>>,
}

impl Tally {
    /// Room for `slots` registered counters, none of them created yet.
    pub(crate) fn new(mode: CountersMode, slots: usize) -> Self {
        Self {
            mode,
            slots: vec![None; slots],
        }
    }

    /// Record a match of counter number `slot`, registered as `id`, at `pos`.
    pub(crate) fn record<T: CellValue + ?Sized>(
        &mut self,
        slot: usize,
        id: &str,
        pos: CellPos,
        value: &T,
    ) {
        let mode = self.mode;
        if let Some(entry) = self.slots.get_mut(slot) {
            let amount = match mode {
                CountersMode::Count => 1,
                CountersMode::Sum => value.as_integer().unwrap_or(0),
            };
            entry
                .get_or_insert_with(|| CounterTally::new(id.to_string()))
                .record(mode, pos, amount);
        }
    }

    pub fn mode(&self) -> CountersMode {
        self.mode
    }

    pub fn counter(&self, id: &str) -> Option<&CounterTally> {
        self.counters().find(|c| c.id == id)
    }

    /// Counters that matched, in registration order.
    pub fn counters(&self) -> impl Iterator<Item = &CounterTally> + '_ {
        self.slots.iter().flatten()
    }

    /// Number of counters that matched.
    pub fn len(&self) -> usize {
        self.counters().count()
    }

    /// True when no counter matched any cell.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_mode_is_idempotent_per_cell() {
        let mut tally = Tally::new(CountersMode::Count, 1);
        let pos = CellPos::new(0, 0);
        tally.record(0, "all", pos, &7i64);
        tally.record(0, "all", pos, &7i64);
        tally.record(0, "all", CellPos::new(0, 1), &9i64);

        let all = tally.counter("all").unwrap();
        assert_eq!(all.get(pos), 1);
        assert_eq!(all.total(), 2);
        assert_eq!(all.hits(), 2);
    }

    #[test]
    fn sum_mode_adds_integers_only() {
        let mut tally = Tally::new(CountersMode::Sum, 1);
        tally.record(0, "sum", CellPos::new(0, 0), &5i64);
        tally.record(0, "sum", CellPos::new(0, 1), &"text");
        tally.record(0, "sum", CellPos::new(1, 1), &2.5f64);

        let sum = tally.counter("sum").unwrap();
        assert_eq!(sum.total(), 5);
        // Non-integer matches still create a zero entry.
        assert_eq!(sum.hits(), 3);
        assert_eq!(sum.get(CellPos::new(0, 1)), 0);
    }

    #[test]
    fn row_and_column_totals() {
        let mut tally = Tally::new(CountersMode::Sum, 1);
        for (row, col, v) in [(0, 0, 1i64), (0, 2, 2), (1, 0, 4), (2, 2, 8)] {
            tally.record(0, "v", CellPos::new(row, col), &v);
        }
        let v = tally.counter("v").unwrap();
        assert_eq!(
            (0..3).map(|r| v.row_total(r)).collect::<Vec<_>>(),
            vec![3, 4, 8]
        );
        assert_eq!(
            (0..3).map(|c| v.column_total(c)).collect::<Vec<_>>(),
            vec![5, 0, 10]
        );
        assert_eq!(v.row_totals(3), vec![3, 4, 8]);
        assert_eq!(v.column_totals(3), vec![5, 0, 10]);
        // Positions past `len` are left out.
        assert_eq!(v.column_totals(2), vec![5, 0]);
        assert_eq!(v.row_totals(4), vec![3, 4, 8, 0]);
    }

    #[test]
    fn counters_appear_on_first_match() {
        let mut tally = Tally::new(CountersMode::Count, 3);
        assert!(tally.is_empty());
        assert_eq!(tally.len(), 0);

        tally.record(2, "c", CellPos::new(0, 0), &1i64);
        tally.record(0, "a", CellPos::new(0, 1), &1i64);

        // Registration order, not match order; "b" never matched.
        let ids: Vec<&str> = tally.counters().map(CounterTally::id).collect();
        assert_eq!(ids, vec!["a", "c"]);
        assert!(tally.counter("b").is_none());
        assert_eq!(tally.len(), 2);
    }

    #[test]
    fn unknown_slot_is_ignored() {
        let mut tally = Tally::new(CountersMode::Count, 1);
        tally.record(5, "a", CellPos::new(0, 0), &1i64);
        assert!(tally.is_empty());
        assert!(tally.counter("a").is_none());
    }
}
