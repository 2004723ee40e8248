//! cloudls - list cloud inventory resources as tables
//!
//! Every subcommand runs the same pipeline: fetch records from a provider,
//! filter them, expand the column list, resolve dotted field paths, apply
//! display transforms, sort, truncate, render and page.
//!
//! # Example
//!
//! ```bash
//! # Running instances owned by alice, newest launch first
//! cloudls ls --filter state=running --tag Owner=alice --sort-by launch_time
//!
//! # IAM users as CSV
//! cloudls users -o csv
//!
//! # Offline, from a saved snapshot
//! cloudls --snapshot inventory.yaml volumes
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod listing;
pub mod output;
pub mod provider;
pub mod ui;

pub use cli::{Cli, Command, DisplayArgs, FilterArgs, FilteredArgs, ListingArgs, OutputFormat};
pub use commands::{build_provider, render_command, run_command};
pub use error::{CloudlsError, Result};
pub use listing::{
    build_filters, resolve_field, tabulate, ColumnExpansion, ColumnSpec, FieldLookup,
    FilterClause, ListingRequest, Record,
};
pub use output::{OutputSink, TableOptions};
pub use provider::{InventoryClient, Provider, ResourceProvider, SnapshotProvider, TokenResolver};
