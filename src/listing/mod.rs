//! Generic listing pipeline
//!
//! fetch → filter → expand columns → resolve fields → transform cells →
//! sort → trim/truncate → render → page. Fetching and paging live outside
//! this module; everything in between is here.

mod columns;
mod filter;
mod pipeline;
mod record;
mod transform;

pub use columns::{add_derived_names, derive_name, ColumnExpansion, ColumnSpec};
pub use filter::{build_filters, FilterClause};
pub use pipeline::{resolve_grid, tabulate, ListingRequest};
pub use record::{as_tag_pairs, display_value, resolve_field, FieldLookup, Record};
pub use transform::{arn_tail, join_sub_field, sub_field, CellTransform, CellTransforms};
