//! JSON and YAML output of the resolved grid

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::error::Result;

/// One grid row serialized as an object in column order
struct RowView<'a> {
    columns: &'a [String],
    cells: &'a [String],
}

impl Serialize for RowView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (idx, column) in self.columns.iter().enumerate() {
            let value = self.cells.get(idx).map(String::as_str).unwrap_or("");
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}

fn rows<'a>(grid: &'a [Vec<String>], columns: &'a [String]) -> Vec<RowView<'a>> {
    grid.iter()
        .map(|cells| RowView { columns, cells })
        .collect()
}

/// Format the grid as a pretty JSON array of objects
pub fn format_json(grid: &[Vec<String>], columns: &[String]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(&rows(grid, columns))?;
    out.push('\n');
    Ok(out)
}

/// Format the grid as a YAML sequence of mappings
pub fn format_yaml(grid: &[Vec<String>], columns: &[String]) -> Result<String> {
    Ok(serde_yml::to_string(&rows(grid, columns))?)
}
