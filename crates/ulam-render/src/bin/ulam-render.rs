//! Ulam Spiral Renderer
//!
//! Usage: `ulam-render [COUNT | FILE.json]`
//!
//! Lays `1..=COUNT` (or the values of a JSON array) out on the spiral and
//! prints the annotated table. Options come from `ULAM_*` environment
//! variables; see [`RenderConfig::from_env`].

use std::env;
use std::io::Write;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ulam_grid::{build_grid, AggregationEngine, Value};
use ulam_render::{render, InputSource, RenderConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing (stderr, so stdout stays clean for the table)
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ulam_render=info,ulam_grid=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = RenderConfig::from_env()?;
    let source = InputSource::from_arg(env::args().nth(1), config.count);

    tracing::info!(
        ?source,
        counters_mode = %config.spiral.counters_mode,
        format = %config.format,
        "Rendering Ulam spiral"
    );

    let grid = build_grid(source.load()?);

    let mut engine = AggregationEngine::<Value>::from_config(&config.spiral);
    engine.register_counter("cells", |_: &Value| true);

    let view = engine.compute_view(&grid)?;
    tracing::info!(
        width = view.width(),
        height = view.height(),
        markers = view.markers().len(),
        "View assembled"
    );

    let output = render(&view, &config)?;
    std::io::stdout().lock().write_all(output.as_bytes())?;

    Ok(())
}
