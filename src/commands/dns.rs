//! DNS zones, one row per record value

use log::debug;
use serde_json::Value;

use super::path_segment;
use crate::cli::ZonesArgs;
use crate::config::{columns, paths};
use crate::error::Result;
use crate::listing::{display_value, resolve_field, Record};
use crate::output::render_output;
use crate::provider::ResourceProvider;

/// Column name for the zone's private flag
const PRIVATE_COLUMN: &str = "Private";

pub async fn zones<P: ResourceProvider>(provider: &P, args: &ZonesArgs) -> Result<String> {
    let columns = zone_columns();
    let mut grid = Vec::new();

    for zone in provider.list(paths::ZONES, &[]).await? {
        let name = display_value(resolve_field(&zone, "Name"));
        if !zone_selected(&name, &args.zones) {
            continue;
        }
        let private = display_value(resolve_field(&zone, "Config.PrivateZone"));
        let path = format!("{}/{}/record-sets", paths::ZONES, path_segment(&zone_id(&zone)));
        let record_sets = provider.list(&path, &[]).await?;
        debug!("Zone {} has {} record sets", name, record_sets.len());

        for rrs in &record_sets {
            grid.extend(record_rows(rrs, &private));
        }
    }

    render_output(
        grid,
        &columns,
        args.display.output,
        &args.display.table_options(),
    )
}

fn zone_columns() -> Vec<String> {
    columns::ZONE_RECORD_SETS
        .iter()
        .chain(columns::ZONE_RECORDS)
        .chain(&[PRIVATE_COLUMN])
        .map(|c| c.to_string())
        .collect()
}

/// A zone is shown when no names were given or its name matches one of them
/// with or without the trailing dot
fn zone_selected(name: &str, wanted: &[String]) -> bool {
    wanted.is_empty()
        || wanted
            .iter()
            .any(|w| w == name || format!("{}.", w) == name)
}

/// Bare zone id (`/hostedzone/Z123` → `Z123`)
fn zone_id(zone: &Record) -> String {
    let id = display_value(resolve_field(zone, "Id"));
    id.rsplit('/').next().unwrap_or_default().to_string()
}

fn record_rows(rrs: &Record, private: &str) -> Vec<Vec<String>> {
    let set_cells: Vec<String> = columns::ZONE_RECORD_SETS
        .iter()
        .map(|c| display_value(resolve_field(rrs, c)))
        .collect();

    resolve_field(rrs, "ResourceRecords")
        .and_then(Value::as_array)
        .map(|records| {
            records
                .iter()
                .map(|record| {
                    let mut row = set_cells.clone();
                    row.extend(
                        columns::ZONE_RECORDS
                            .iter()
                            .map(|c| display_value(resolve_field(record, c))),
                    );
                    row.push(private.to_string());
                    row
                })
                .collect()
        })
        .unwrap_or_default()
}
