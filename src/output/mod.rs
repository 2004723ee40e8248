//! Output formatting module
//!
//! Renders the resolved grid as a table, CSV, JSON or YAML and hands the
//! text to an output sink.

mod csv;
mod json;
mod pager;
mod table;

use log::debug;

use crate::cli::OutputFormat;
use crate::error::Result;

pub use self::csv::{escape_csv, format_csv};
pub use self::json::{format_json, format_yaml};
pub use self::pager::{should_page, OutputSink};
pub use self::table::{
    compare_cells, render_table, sort_grid, trim_header, truncate_cell, TableOptions,
};

/// Render the grid in the requested format
///
/// Sorting applies to every format; truncation and header trimming only
/// to the table.
pub fn render_output(
    mut grid: Vec<Vec<String>>,
    columns: &[String],
    format: OutputFormat,
    options: &TableOptions,
) -> Result<String> {
    debug!(
        "Rendering {} rows x {} columns as {}",
        grid.len(),
        columns.len(),
        format
    );
    match format {
        OutputFormat::Table => render_table(grid, columns, options),
        structured => {
            if let Some(ref sort_by) = options.sort_by {
                sort_grid(&mut grid, columns, sort_by, options.ascending)?;
            }
            match structured {
                OutputFormat::Csv => Ok(format_csv(&grid, columns)),
                OutputFormat::Json => format_json(&grid, columns),
                _ => format_yaml(&grid, columns),
            }
        }
    }
}

/// Write rendered text through a sink chosen for it, closing the sink
///
/// Only tables are paged; structured formats go straight to stdout.
pub fn emit(text: &str, format: OutputFormat) -> Result<()> {
    let mut sink = match format {
        OutputFormat::Table => OutputSink::for_text(text),
        _ => OutputSink::stdout(),
    };
    write_to(&mut sink, text)?;
    sink.finish()
}

/// Write text to an already chosen sink, ensuring a trailing newline
pub fn write_to(sink: &mut OutputSink, text: &str) -> Result<()> {
    sink.write_text(text)?;
    if !text.ends_with('\n') {
        sink.write_text("\n")?;
    }
    Ok(())
}
