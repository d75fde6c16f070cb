//! Ulam Spiral Grid
//!
//! Lays a sequence out on the square spiral, pads the jagged result into a
//! rectangle and runs pluggable markers and counters over it in one pass.
//!
//! # Architecture
//!
//! - **SparseGrid**: `y -> x -> value`, rows and cells in ascending order
//! - **Layout**: row-major arena of the padded view with explicit placeholders
//! - **AggregationEngine**: ordered marker/counter registries and the pass
//! - **GridView**: layout + winning markers + counter headers for renderers
//!
//! # Usage
//!
//! ```
//! use ulam_grid::{build_grid, AggregationEngine, CellValue, CountersMode, Sequence, Value};
//!
//! let grid = build_grid(Sequence::range(1, 9)?);
//!
//! let mut engine: AggregationEngine<Value> = AggregationEngine::new(CountersMode::Count);
//! engine.register_counter("prime", |v: &Value| v.is_prime());
//! engine.register_marker("prime", |v: &Value| v.is_prime().then(|| "red".to_string()));
//!
//! let view = engine.compute_view(&grid)?;
//! assert_eq!((view.width(), view.height()), (3, 3));
//! assert_eq!(view.tally().counter("prime").map(|c| c.total()), Some(4));
//! # Ok::<(), ulam_grid::Error>(())
//! ```

mod config;
mod engine;
mod error;
mod grid;
mod layout;
mod registry;
mod sequence;
mod tally;
mod value;
mod view;

pub use config::{CountersMode, SpiralConfig};
pub use engine::{Aggregate, AggregationEngine, PRIME_ID, PRIME_LABEL};
pub use error::{Error, Result};
pub use grid::{build_grid, Extents, GridRow, SparseGrid};
pub use layout::{CellPos, Layout, ViewCell, MAX_VIEW_CELLS};
pub use registry::{Classifier, Predicate, Registry};
pub use sequence::Sequence;
pub use tally::{CounterTally, Tally};
pub use value::{CellValue, Value};
pub use view::{GridView, Header};

pub use ulam_spiral::{is_prime, GridCoord, SpiralIndex};
