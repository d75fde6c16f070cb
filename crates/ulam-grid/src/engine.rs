//! Aggregation engine.
//!
//! Holds the counter and marker registries and runs them over every cell of
//! the padded view in one row-major pass. The pass returns its results
//! instead of storing them, so the engine is never mutated by rendering and
//! one engine can serve any number of views.
//!
//! Callbacks are plain closures; a panic inside one unwinds through the pass
//! to the caller untouched.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, trace};

use crate::{
    CellPos, CellValue, Classifier, CountersMode, GridView, Layout, Predicate, Registry, Result,
    SparseGrid, SpiralConfig, Tally,
};

/// Counter id and marker id registered by [`AggregationEngine::from_config`].
pub const PRIME_ID: &str = "prime";

/// Marker label used for primes.
pub const PRIME_LABEL: &str = "#e9e9e9";

/// Output of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Aggregate {
    /// Winning marker label per data cell
    pub markers: BTreeMap<CellPos, String>,
    /// Counter accumulators
    pub tally: Tally,
}

/// Pluggable per-cell markers and counters.
pub struct AggregationEngine<T> {
    mode: CountersMode,
    counters: Registry<dyn Predicate<T>>,
    markers: Registry<dyn Classifier<T>>,
}

impl<T> AggregationEngine<T> {
    /// Create an engine with no registrations.
    pub fn new(mode: CountersMode) -> Self {
        Self {
            mode,
            counters: Registry::new(),
            markers: Registry::new(),
        }
    }

    pub fn counters_mode(&self) -> CountersMode {
        self.mode
    }

    /// Register a counter, replacing any earlier one with the same id.
    pub fn register_counter(
        &mut self,
        id: impl Into<String>,
        predicate: impl Predicate<T> + 'static,
    ) -> &mut Self {
        let id = id.into();
        if self.counters.insert(id.clone(), Box::new(predicate)) {
            debug!(id = %id, "Replaced counter");
        }
        self
    }

    /// Register a marker, replacing any earlier one with the same id.
    pub fn register_marker(
        &mut self,
        id: impl Into<String>,
        classifier: impl Classifier<T> + 'static,
    ) -> &mut Self {
        let id = id.into();
        if self.markers.insert(id.clone(), Box::new(classifier)) {
            debug!(id = %id, "Replaced marker");
        }
        self
    }

    /// Counter ids in registration order.
    pub fn counter_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.counters.ids()
    }

    /// Marker ids in registration order.
    pub fn marker_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.markers.ids()
    }
}

impl<T: CellValue + 'static> AggregationEngine<T> {
    /// Create an engine from config, pre-registering the prime marker and
    /// counter when `mark_prime` is set.
    pub fn from_config(config: &SpiralConfig) -> Self {
        let mut engine = Self::new(config.counters_mode);
        if config.mark_prime {
            engine
                .register_marker(PRIME_ID, |value: &T| {
                    value.is_prime().then(|| PRIME_LABEL.to_string())
                })
                .register_counter(PRIME_ID, |value: &T| value.is_prime());
        }
        engine
    }
}

impl<T: CellValue> AggregationEngine<T> {
    /// Pad `grid` into a rectangle, run the pass and bundle the results.
    ///
    /// Grids built from a sequence always succeed; see [`Layout::assemble`]
    /// for the hand-built grids that are rejected.
    pub fn compute_view<'g>(&self, grid: &'g SparseGrid<T>) -> Result<GridView<'g, T>> {
        let layout = Layout::assemble(grid)?;
        let aggregate = self.aggregate(&layout);
        Ok(GridView::new(layout, aggregate))
    }

    /// Evaluate every marker and counter against every data cell of `layout`.
    pub fn aggregate(&self, layout: &Layout<'_, T>) -> Aggregate {
        let mut tally = Tally::new(self.mode, self.counters.len());
        let mut markers = BTreeMap::new();
        let mut visited = 0usize;
        let mut hits = 0usize;

        for (pos, cell) in layout.positions() {
            let Some(value) = cell.value() else {
                continue;
            };
            visited += 1;

            // Last non-empty label wins.
            let mut marker = None;
            for (_, classifier) in self.markers.iter() {
                if let Some(label) = classifier.classify(value).filter(|l| !l.is_empty()) {
                    marker = Some(label);
                }
            }
            if let Some(label) = marker {
                trace!(row = pos.row, col = pos.col, label = %label, "Marked cell");
                markers.insert(pos, label);
            }

            for (slot, (id, predicate)) in self.counters.iter().enumerate() {
                if predicate.evaluate(value) {
                    tally.record(slot, id, pos, value);
                    hits += 1;
                }
            }
        }

        debug!(
            cells = visited,
            markers = markers.len(),
            counter_hits = hits,
            mode = %self.mode,
            "Aggregation pass complete"
        );

        Aggregate { markers, tally }
    }
}

impl<T> fmt::Debug for AggregationEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AggregationEngine")
            .field("mode", &self.mode)
            .field("counters", &self.counters)
            .field("markers", &self.markers)
            .finish()
    }
}
