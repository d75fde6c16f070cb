//! Plain-text table rendering.
//!
//! Layout, outside in:
//!
//! ```text
//!  .  .  | col totals        |  .  .
//! row    | padded matrix     | row totals
//! totals |                   | (mirrored)
//!  .  .  | col totals (mirr) |  .  .
//! ```

use std::fmt::Display;

use ulam_grid::{GridView, ViewCell};

use crate::RenderConfig;

const PLACEHOLDER: &str = "-";

/// Render `view` as an aligned text table.
pub fn render_text<T: Display>(view: &GridView<'_, T>, config: &RenderConfig) -> String {
    let edge = if config.row_counters {
        view.tally().len()
    } else {
        0
    };

    let mut table: Vec<Vec<String>> = Vec::new();

    if config.col_counters {
        for header in view.col_headers(false) {
            table.push(header_row(edge, header.values));
        }
    }

    for (row, cells) in view.rows().enumerate() {
        let mut line = Vec::with_capacity(cells.len() + 2 * edge);
        if config.row_counters {
            line.extend(view.row_header(row, false).into_iter().map(|(_, v)| v.to_string()));
        }
        for (col, cell) in cells.iter().enumerate() {
            let marked = view.marker(ulam_grid::CellPos::new(row, col)).is_some();
            line.push(cell_text(cell, marked, config.raw));
        }
        if config.row_counters {
            line.extend(view.row_header(row, true).into_iter().map(|(_, v)| v.to_string()));
        }
        table.push(line);
    }

    if config.col_counters {
        for header in view.col_headers(true) {
            table.push(header_row(edge, header.values));
        }
    }

    align(&table)
}

fn header_row(edge: usize, values: Vec<i64>) -> Vec<String> {
    let mut line = vec![String::new(); edge];
    line.extend(values.into_iter().map(|v| v.to_string()));
    line.extend(std::iter::repeat(String::new()).take(edge));
    line
}

fn cell_text<T: Display>(cell: &ViewCell<'_, T>, marked: bool, raw: bool) -> String {
    let Some(value) = cell.value() else {
        return PLACEHOLDER.to_string();
    };
    if raw {
        value.to_string()
    } else if cell.is_center() {
        format!("[{}]", value)
    } else if marked {
        format!("{}*", value)
    } else {
        value.to_string()
    }
}

/// Right-align every column to its widest entry.
fn align(table: &[Vec<String>]) -> String {
    let columns = table.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; columns];
    for line in table {
        for (i, cell) in line.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for line in table {
        let rendered: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{:>w$}", cell, w = w))
            .collect();
        out.push_str(rendered.join(" ").trim_end());
        out.push('\n');
    }
    out
}
