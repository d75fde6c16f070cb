//! Ulam Spiral Rendering
//!
//! Turns a [`GridView`] into output: an aligned plain-text table framed by
//! counter totals, or the view's JSON encoding.
//!
//! # Usage
//!
//! ```ignore
//! let config = RenderConfig::from_env()?;
//! let grid = build_grid(InputSource::Range(config.count).load()?);
//! let view = AggregationEngine::from_config(&config.spiral).compute_view(&grid)?;
//! print!("{}", render(&view, &config)?);
//! ```

mod config;
mod error;
mod text;

use std::fmt::Display;

use serde::Serialize;
use ulam_grid::GridView;

pub use config::{InputSource, OutputFormat, RenderConfig};
pub use error::{Error, Result};
pub use text::render_text;

/// Render `view` in the configured format.
pub fn render<T: Display + Serialize>(view: &GridView<'_, T>, config: &RenderConfig) -> Result<String> {
    match config.format {
        OutputFormat::Text => Ok(render_text(view, config)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(view)?;
            json.push('\n');
            Ok(json)
        }
    }
}
