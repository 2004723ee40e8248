//! The listing pipeline: records in, rendered text out

use log::debug;

use super::columns::{add_derived_names, ColumnExpansion, ColumnSpec};
use super::record::{FieldLookup, Record};
use super::transform::CellTransforms;
use crate::cli::OutputFormat;
use crate::config::listing;
use crate::error::Result;
use crate::output::{render_output, TableOptions};

/// Everything a command decides about how its records are shown
#[derive(Debug)]
pub struct ListingRequest {
    pub columns: ColumnSpec,
    pub expansion: ColumnExpansion<'static>,
    pub transforms: CellTransforms,
    pub options: TableOptions,
    pub format: OutputFormat,
}

impl ListingRequest {
    pub fn new(columns: ColumnSpec, options: TableOptions, format: OutputFormat) -> Self {
        Self {
            columns,
            expansion: ColumnExpansion::default(),
            transforms: CellTransforms::new(),
            options,
            format,
        }
    }

    pub fn with_expansion(mut self, expansion: ColumnExpansion<'static>) -> Self {
        self.expansion = expansion;
        self
    }

    pub fn with_transforms(mut self, transforms: CellTransforms) -> Self {
        self.transforms = transforms;
        self
    }
}

/// Resolve every column of every record into display strings
pub fn resolve_grid<L>(
    records: &[L],
    columns: &[String],
    transforms: &CellTransforms,
) -> Vec<Vec<String>>
where
    L: FieldLookup,
{
    records
        .iter()
        .map(|record| {
            columns
                .iter()
                .map(|column| transforms.resolve_cell(record, column))
                .collect()
        })
        .collect()
}

/// Expand columns, resolve fields, then sort and render
pub fn tabulate(mut records: Vec<Record>, request: ListingRequest) -> Result<String> {
    let ListingRequest {
        mut columns,
        expansion,
        transforms,
        options,
        format,
    } = request;

    expansion.apply(&mut columns);
    if expansion.derived == Some(listing::NAME_COLUMN) {
        add_derived_names(&mut records);
    }

    debug!(
        "Tabulating {} records over columns {:?}",
        records.len(),
        columns.as_slice()
    );
    let grid = resolve_grid(&records, columns.as_slice(), &transforms);
    render_output(grid, columns.as_slice(), format, &options)
}
