//! Filter clause construction from `--filter` and `--tag` arguments

use crate::config::listing;
use crate::error::{CloudlsError, Result};

/// A provider-side predicate: the named field must equal the value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterClause {
    name: String,
    value: String,
}

impl FilterClause {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Tag key if this clause targets a tag (`tag:KEY`)
    pub fn tag_key(&self) -> Option<&str> {
        self.name.strip_prefix(listing::TAG_FILTER_PREFIX)
    }
}

/// Build filter clauses: explicit filters first, then tags, each in user order
pub fn build_filters(filters: &[String], tags: &[String]) -> Result<Vec<FilterClause>> {
    let mut clauses = Vec::with_capacity(filters.len() + tags.len());

    for entry in filters {
        let (name, value) = split_pair(entry, "--filter")?;
        clauses.push(FilterClause::new(name, value));
    }

    for entry in tags {
        let (name, value) = split_pair(entry, "--tag")?;
        clauses.push(FilterClause::new(
            format!("{}{}", listing::TAG_FILTER_PREFIX, name),
            value,
        ));
    }

    Ok(clauses)
}

/// Split on the first `=` only so values may contain `=`
fn split_pair<'a>(entry: &'a str, flag: &str) -> Result<(&'a str, &'a str)> {
    entry.split_once('=').ok_or_else(|| {
        CloudlsError::MalformedArgument(format!(
            "Invalid {} entry '{}': expected KEY=VALUE",
            flag, entry
        ))
    })
}
