//! Offline provider backed by a saved inventory snapshot
//!
//! The snapshot is a JSON or YAML object mapping collection paths to record
//! arrays (or, for single-record paths such as `iam/current-user`, to one
//! object). Filter clauses are applied locally with exact string matching.

use std::fs;
use std::path::Path;

use log::debug;
use serde_json::{Map, Value};

use crate::error::{CloudlsError, Result};
use crate::listing::{as_tag_pairs, display_value, resolve_field, FilterClause, Record};
use crate::provider::traits::ResourceProvider;

/// Provider reading records from a snapshot file
#[derive(Debug)]
pub struct SnapshotProvider {
    collections: Map<String, Value>,
}

impl SnapshotProvider {
    /// Load a snapshot; `.yaml`/`.yml` files are parsed as YAML, others as JSON
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CloudlsError::Config(format!(
                "Failed to read snapshot {}: {}",
                path.display(),
                e
            ))
        })?;
        let is_yaml = matches!(
            path.extension().and_then(|e| e.to_str()),
            Some("yaml") | Some("yml")
        );
        let root: Value = if is_yaml {
            serde_yml::from_str(&content)?
        } else {
            serde_json::from_str(&content)?
        };
        debug!("Loaded snapshot from {}", path.display());
        Self::from_value(root)
    }

    /// Build from an already parsed snapshot object
    pub fn from_value(root: Value) -> Result<Self> {
        match root {
            Value::Object(collections) => Ok(Self { collections }),
            _ => Err(CloudlsError::Config(
                "Snapshot must be an object mapping collection paths to records".to_string(),
            )),
        }
    }

    fn collection(&self, path: &str) -> Option<&Value> {
        self.collections.get(path.trim_matches('/'))
    }
}

/// Whether a record satisfies one filter clause
pub fn matches_clause(record: &Record, clause: &FilterClause) -> bool {
    match clause.tag_key() {
        Some(key) => resolve_field(record, "tags")
            .and_then(Value::as_array)
            .and_then(|items| as_tag_pairs(items))
            .map(|pairs| pairs.iter().any(|(k, v)| k == key && v == clause.value()))
            .unwrap_or(false),
        None => resolve_field(record, clause.name())
            .map(|v| display_value(Some(v)) == clause.value())
            .unwrap_or(false),
    }
}

impl ResourceProvider for SnapshotProvider {
    async fn list(&self, path: &str, filters: &[FilterClause]) -> Result<Vec<Record>> {
        let items = match self.collection(path) {
            Some(Value::Array(items)) => items.clone(),
            Some(_) => {
                return Err(CloudlsError::Config(format!(
                    "Snapshot entry '{}' is not a list",
                    path
                )))
            }
            None => {
                debug!("Snapshot has no '{}' collection", path);
                Vec::new()
            }
        };

        Ok(items
            .into_iter()
            .map(Record::new)
            .filter(|record| filters.iter().all(|clause| matches_clause(record, clause)))
            .collect())
    }

    async fn get(&self, path: &str) -> Result<Record> {
        match self.collection(path) {
            Some(value @ Value::Object(_)) => Ok(Record::new(value.clone())),
            _ => Err(CloudlsError::Api {
                status: 404,
                message: format!("Failed to fetch {}", path),
            }),
        }
    }
}
