//! Display-only cell transforms keyed by column name

use std::collections::HashMap;

use serde_json::Value;

use super::record::{display_value, resolve_field, FieldLookup};

/// Maps a resolved field value to its displayed text
pub type CellTransform = Box<dyn Fn(Option<&Value>) -> String>;

/// Per-column transforms; columns without an entry use `display_value`
#[derive(Default)]
pub struct CellTransforms {
    transforms: HashMap<String, CellTransform>,
}

impl CellTransforms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transform for a column (builder style)
    pub fn with(mut self, column: &str, transform: CellTransform) -> Self {
        self.transforms.insert(column.to_string(), transform);
        self
    }

    /// Transform for a column, identity display if none registered
    pub fn get(&self, column: &str) -> &dyn Fn(Option<&Value>) -> String {
        match self.transforms.get(column) {
            Some(transform) => transform.as_ref(),
            None => &display_value,
        }
    }

    /// Resolve a column on a record and apply its transform
    pub fn resolve_cell<L>(&self, record: &L, column: &str) -> String
    where
        L: FieldLookup + ?Sized,
    {
        self.get(column)(resolve_field(record, column))
    }
}

impl std::fmt::Debug for CellTransforms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut columns: Vec<&String> = self.transforms.keys().collect();
        columns.sort();
        f.debug_struct("CellTransforms")
            .field("columns", &columns)
            .finish()
    }
}

/// Show one sub-field of an object value (`state` → `state.Name`)
pub fn sub_field(path: &'static str) -> CellTransform {
    Box::new(move |value: Option<&Value>| {
        display_value(value.and_then(|v| resolve_field(v, path)))
    })
}

/// Join one sub-field across a list of objects (`attachments` → instance ids)
pub fn join_sub_field(path: &'static str) -> CellTransform {
    Box::new(move |value: Option<&Value>| match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| resolve_field(item, path))
            .map(|v| display_value(Some(v)))
            .collect::<Vec<_>>()
            .join(", "),
        other => display_value(other),
    })
}

/// Last `/`-separated segment of an ARN found at `path`
pub fn arn_tail(path: &'static str) -> CellTransform {
    Box::new(move |value: Option<&Value>| {
        value
            .and_then(|v| resolve_field(v, path))
            .and_then(Value::as_str)
            .and_then(|arn| arn.rsplit('/').next())
            .unwrap_or_default()
            .to_string()
    })
}
