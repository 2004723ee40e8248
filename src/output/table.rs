//! Aligned text table rendering with sorting, truncation and header trimming

use std::cmp::Ordering;

use comfy_table::{presets::NOTHING, Table};

use crate::config::listing;
use crate::error::{CloudlsError, Result};

/// Options controlling how the resolved grid is rendered
#[derive(Debug, Clone, Default)]
pub struct TableOptions {
    /// Cells longer than this are cut and marked with an ellipsis
    pub max_col_width: Option<usize>,
    /// Literal prefixes stripped from header labels, in order
    pub trim_col_names: Vec<String>,
    /// Column to sort by
    pub sort_by: Option<String>,
    /// Sort ascending instead of the default descending order
    pub ascending: bool,
}

/// Stable sort of the grid by a named column, descending unless `ascending`
pub fn sort_grid(
    grid: &mut [Vec<String>],
    columns: &[String],
    sort_by: &str,
    ascending: bool,
) -> Result<()> {
    let idx = columns.iter().position(|c| c == sort_by).ok_or_else(|| {
        CloudlsError::MalformedArgument(format!(
            "Cannot sort by '{}': not one of the rendered columns ({})",
            sort_by,
            columns.join(", ")
        ))
    })?;

    grid.sort_by(|a, b| {
        let ord = compare_cells(cell(a, idx), cell(b, idx));
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    Ok(())
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Sort key of a cell: finite numbers rank below text
enum CellKey<'a> {
    Number(f64),
    Text(&'a str),
}

impl<'a> CellKey<'a> {
    fn of(cell: &'a str) -> Self {
        match cell.parse::<f64>() {
            Ok(n) if n.is_finite() => CellKey::Number(n),
            _ => CellKey::Text(cell),
        }
    }
}

/// Total order over cells: numbers by value, then text lexicographically
pub fn compare_cells(a: &str, b: &str) -> Ordering {
    match (CellKey::of(a), CellKey::of(b)) {
        (CellKey::Number(x), CellKey::Number(y)) => x.total_cmp(&y),
        (CellKey::Number(_), CellKey::Text(_)) => Ordering::Less,
        (CellKey::Text(_), CellKey::Number(_)) => Ordering::Greater,
        (CellKey::Text(x), CellKey::Text(y)) => x.cmp(y),
    }
}

/// Cut a cell to `max_width` characters, ending in an ellipsis when cut
pub fn truncate_cell(value: &str, max_width: usize) -> String {
    if value.chars().count() <= max_width {
        return value.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out: String = value.chars().take(max_width - 1).collect();
    out.push(listing::ELLIPSIS);
    out
}

/// Strip each prefix in turn from a header label
pub fn trim_header(name: &str, prefixes: &[String]) -> String {
    let mut label = name;
    for prefix in prefixes {
        if let Some(rest) = label.strip_prefix(prefix.as_str()) {
            label = rest;
        }
    }
    label.to_string()
}

/// Render the grid as an aligned table with a header row
pub fn render_table(
    mut grid: Vec<Vec<String>>,
    columns: &[String],
    options: &TableOptions,
) -> Result<String> {
    if let Some(ref sort_by) = options.sort_by {
        sort_grid(&mut grid, columns, sort_by, options.ascending)?;
    }

    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_header(
        columns
            .iter()
            .map(|c| trim_header(c, &options.trim_col_names))
            .collect::<Vec<_>>(),
    );

    for row in grid {
        let cells: Vec<String> = match options.max_col_width {
            Some(max) => row.iter().map(|c| truncate_cell(c, max)).collect(),
            None => row,
        };
        table.add_row(cells);
    }

    Ok(table.to_string())
}
