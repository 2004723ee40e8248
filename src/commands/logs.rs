//! Log groups and their streams
//!
//! `lastIngestionTime` is shown as the time elapsed since the last event.
//! Rows are ordered by that age unless another column is requested. Given
//! `GROUP.STREAM` arguments, the events of those streams are printed instead.

use chrono::Utc;
use log::debug;

use super::path_segment;
use crate::cli::LogsArgs;
use crate::config::{columns, paths};
use crate::error::{CloudlsError, Result};
use crate::listing::{display_value, resolve_field, Record};
use crate::output::render_output;
use crate::provider::ResourceProvider;

const LAST_INGESTION_COLUMN: &str = "lastIngestionTime";

/// A rendered stream row plus its age in seconds, used for ordering
struct StreamRow {
    age_secs: i64,
    cells: Vec<String>,
}

pub async fn logs<P: ResourceProvider>(provider: &P, args: &LogsArgs) -> Result<String> {
    if !args.log_streams.is_empty() {
        return stream_events(provider, &args.log_streams).await;
    }

    let now_ms = Utc::now().timestamp_millis();
    let mut rows = stream_rows(provider, args.log_group.as_deref(), now_ms).await?;

    let mut options = args.display.table_options();
    let sort_by = options
        .sort_by
        .get_or_insert_with(|| LAST_INGESTION_COLUMN.to_string());
    if sort_by.as_str() == LAST_INGESTION_COLUMN {
        // Ages are rendered as text, so order them here by their numeric value
        sort_by_age(&mut rows, options.ascending);
        options.sort_by = None;
    }

    let grid = rows.into_iter().map(|row| row.cells).collect();
    render_output(grid, &log_columns(), args.display.output, &options)
}

/// `timestamp message` lines for every event of the named streams
async fn stream_events<P: ResourceProvider>(provider: &P, streams: &[String]) -> Result<String> {
    let mut lines = Vec::new();
    for name in streams {
        let (group, stream) = split_stream_name(name)?;
        let path = format!(
            "{}/{}/streams/{}/events",
            paths::LOG_GROUPS,
            path_segment(group),
            path_segment(stream)
        );
        let events = provider.list(&path, &[]).await?;
        debug!("Stream {} has {} events", name, events.len());
        lines.extend(events.iter().map(|event| {
            format!(
                "{} {}",
                display_value(resolve_field(event, "timestamp")),
                display_value(resolve_field(event, "message"))
            )
        }));
    }
    Ok(lines.join("\n"))
}

/// Split `GROUP.STREAM` on the first dot
fn split_stream_name(name: &str) -> Result<(&str, &str)> {
    name.split_once('.').ok_or_else(|| {
        CloudlsError::MalformedArgument(format!(
            "Invalid log stream '{}': expected GROUP.STREAM",
            name
        ))
    })
}

fn log_columns() -> Vec<String> {
    columns::LOG_GROUPS
        .iter()
        .chain(columns::LOG_STREAMS)
        .map(|c| c.to_string())
        .collect()
}

async fn stream_rows<P: ResourceProvider>(
    provider: &P,
    log_group: Option<&str>,
    now_ms: i64,
) -> Result<Vec<StreamRow>> {
    let mut rows = Vec::new();

    for group in provider.list(paths::LOG_GROUPS, &[]).await? {
        let group_name = display_value(resolve_field(&group, "logGroupName"));
        if log_group.is_some_and(|wanted| wanted != group_name) {
            continue;
        }
        let path = format!("{}/{}/streams", paths::LOG_GROUPS, path_segment(&group_name));
        let streams = provider.list(&path, &[]).await?;
        debug!("Log group {} has {} streams", group_name, streams.len());

        for stream in &streams {
            rows.push(stream_row(&group, stream, now_ms));
        }
    }

    Ok(rows)
}

fn stream_row(group: &Record, stream: &Record, now_ms: i64) -> StreamRow {
    let last_ms = resolve_field(stream, LAST_INGESTION_COLUMN)
        .and_then(|v| v.as_i64())
        .unwrap_or(0);
    let age_secs = (now_ms / 1000 - last_ms / 1000).max(0);

    let mut cells: Vec<String> = columns::LOG_GROUPS
        .iter()
        .map(|c| display_value(resolve_field(group, c)))
        .collect();
    for column in columns::LOG_STREAMS {
        if *column == LAST_INGESTION_COLUMN {
            cells.push(format_age(age_secs));
        } else {
            cells.push(display_value(resolve_field(stream, column)));
        }
    }
    StreamRow { age_secs, cells }
}

/// Stable sort by age, oldest first unless ascending
fn sort_by_age(rows: &mut [StreamRow], ascending: bool) {
    if ascending {
        rows.sort_by_key(|row| row.age_secs);
    } else {
        rows.sort_by_key(|row| std::cmp::Reverse(row.age_secs));
    }
}

/// Render an age as `H:MM:SS`, prefixed with whole days when over a day
pub fn format_age(secs: i64) -> String {
    let days = secs / 86_400;
    let rest = secs % 86_400;
    let clock = format!("{}:{:02}:{:02}", rest / 3600, (rest % 3600) / 60, rest % 60);
    match days {
        0 => clock,
        1 => format!("1 day, {}", clock),
        n => format!("{} days, {}", n, clock),
    }
}
