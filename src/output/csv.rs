//! CSV output of the resolved grid

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Format the grid as CSV with a header line
pub fn format_csv(grid: &[Vec<String>], columns: &[String]) -> String {
    let mut out = String::new();
    push_line(&mut out, columns);
    for row in grid {
        push_line(&mut out, row);
    }
    out
}

fn push_line(out: &mut String, cells: &[String]) {
    let line: Vec<String> = cells.iter().map(|c| escape_csv(c)).collect();
    out.push_str(&line.join(","));
    out.push('\n');
}
