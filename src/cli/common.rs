//! Common CLI types shared across commands

use clap::{Args, ValueEnum};

use crate::config::defaults;
use crate::error::Result;
use crate::listing::{build_filters, ColumnSpec, FilterClause, ListingRequest};
use crate::output::TableOptions;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table, paged when taller than the terminal (default)
    Table,
    /// Comma-separated values
    Csv,
    /// JSON array
    Json,
    /// YAML format
    Yaml,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Provider-side filters
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Filter(s) to apply to output, e.g. --filter state=available
    #[arg(long, num_args = 1.., value_name = "KEY=VALUE")]
    pub filter: Vec<String>,

    /// Tag(s) to filter output by, e.g. --tag Owner=alice
    #[arg(long, num_args = 1.., value_name = "KEY=VALUE")]
    pub tag: Vec<String>,
}

impl FilterArgs {
    /// Filter clauses in user order, filters before tags
    pub fn clauses(&self) -> Result<Vec<FilterClause>> {
        build_filters(&self.filter, &self.tag)
    }
}

/// How the table is sorted and rendered
#[derive(Args, Debug, Clone)]
pub struct DisplayArgs {
    /// Sort rows by this column (descending)
    #[arg(long, value_name = "COLUMN")]
    pub sort_by: Option<String>,

    /// Sort ascending instead
    #[arg(short = 'r', long, default_value_t = false)]
    pub reverse: bool,

    /// Truncate cells longer than this many characters (0 disables)
    #[arg(long, default_value_t = defaults::MAX_COL_WIDTH)]
    pub max_col_width: usize,

    /// Prefixes to strip from column headers
    #[arg(long, num_args = 1.., value_name = "PREFIX")]
    pub trim_col_names: Vec<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

impl DisplayArgs {
    pub fn table_options(&self) -> TableOptions {
        TableOptions {
            max_col_width: (self.max_col_width > 0).then_some(self.max_col_width),
            trim_col_names: self.trim_col_names.clone(),
            sort_by: self.sort_by.clone(),
            ascending: self.reverse,
        }
    }
}

/// Column selection plus display options
#[derive(Args, Debug, Clone)]
pub struct ListingArgs {
    /// Columns to show, in order
    #[arg(long, num_args = 1.., value_name = "NAME")]
    pub columns: Option<Vec<String>>,

    #[command(flatten)]
    pub display: DisplayArgs,
}

impl ListingArgs {
    /// Start a listing request from these arguments and the command's defaults
    pub fn request(&self, default_columns: &[&str]) -> ListingRequest {
        ListingRequest::new(
            ColumnSpec::from_args(self.columns.as_deref(), default_columns),
            self.display.table_options(),
            self.display.output,
        )
    }
}

/// Listing over a filterable collection
#[derive(Args, Debug, Clone)]
pub struct FilteredArgs {
    #[command(flatten)]
    pub filters: FilterArgs,

    #[command(flatten)]
    pub listing: ListingArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_display() {
        assert_eq!(OutputFormat::Table.to_string(), "table");
        assert_eq!(OutputFormat::Csv.to_string(), "csv");
        assert_eq!(OutputFormat::Json.to_string(), "json");
        assert_eq!(OutputFormat::Yaml.to_string(), "yaml");
    }

    #[test]
    fn test_table_options_zero_width_disables_truncation() {
        let display = DisplayArgs {
            sort_by: None,
            reverse: false,
            max_col_width: 0,
            trim_col_names: vec![],
            output: OutputFormat::Table,
        };
        assert_eq!(display.table_options().max_col_width, None);
    }

    #[test]
    fn test_filter_args_clauses() {
        let args = FilterArgs {
            filter: vec!["state=running".to_string()],
            tag: vec!["Owner=alice".to_string()],
        };
        let clauses = args.clauses().unwrap();
        assert_eq!(clauses[1].name(), "tag:Owner");
    }
}
