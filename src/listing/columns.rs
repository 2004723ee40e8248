//! Column specs and implicit column expansion

use log::debug;
use serde_json::Value;

use super::record::{as_tag_pairs, display_value, resolve_field, FieldLookup, Record};
use crate::config::listing;

/// Ordered list of field paths to render; repeats are allowed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnSpec {
    columns: Vec<String>,
}

impl ColumnSpec {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// User-supplied columns, or the command's defaults when none were given
    pub fn from_args(requested: Option<&[String]>, defaults: &[&str]) -> Self {
        match requested {
            Some(cols) if !cols.is_empty() => Self::new(cols.to_vec()),
            _ => Self::new(defaults.iter().map(|c| c.to_string()).collect()),
        }
    }

    /// Append each forced column unless it is already present
    pub fn force(&mut self, forced: &[&str]) {
        for col in forced {
            if !self.contains(col) {
                self.columns.push(col.to_string());
            }
        }
    }

    /// Insert a column at the front, even if already present
    pub fn prepend(&mut self, column: &str) {
        self.columns.insert(0, column.to_string());
    }

    /// Append columns unconditionally
    pub fn extend(&mut self, extra: &[String]) {
        self.columns.extend(extra.iter().cloned());
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Implicit columns a command adds before rendering
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnExpansion<'a> {
    /// Appended when missing
    pub forced: &'a [&'a str],
    /// Always prepended, after the forced columns are appended
    pub derived: Option<&'a str>,
}

impl ColumnExpansion<'_> {
    /// Apply the expansion; call exactly once per invocation
    pub fn apply(&self, spec: &mut ColumnSpec) {
        spec.force(self.forced);
        if let Some(derived) = self.derived {
            spec.prepend(derived);
        }
        debug!("Expanded columns: {:?}", spec.as_slice());
    }
}

/// Value of the record's `Name` tag, or its `id` when there is none
pub fn derive_name<L>(record: &L) -> String
where
    L: FieldLookup + ?Sized,
{
    let from_tag = resolve_field(record, "tags")
        .and_then(Value::as_array)
        .and_then(|items| as_tag_pairs(items))
        .and_then(|pairs| {
            pairs
                .into_iter()
                .rev()
                .find(|(key, _)| key == listing::NAME_TAG)
                .map(|(_, value)| value)
        });

    match from_tag {
        Some(name) => name,
        None => display_value(resolve_field(record, "id")),
    }
}

/// Attach the derived name column to every record
pub fn add_derived_names(records: &mut [Record]) {
    for record in records.iter_mut() {
        let name = derive_name(record);
        record.set_derived(listing::NAME_COLUMN, Value::String(name));
    }
}
