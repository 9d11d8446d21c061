use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

use super::types::{DecisionTable, Row};

/// Read and parse a decision table from a CSV file.
///
/// # Errors
///
/// Returns an error if:
/// - The file does not exist or cannot be read
/// - The file is empty or has no data rows
/// - A row has a different number of cells than the header
pub fn read_table(path: &Path) -> Result<DecisionTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file at {}", path.display()))?;

    parse_table(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Parse CSV text into a decision table.
///
/// Fields are comma-separated and may be double-quoted (with `""` escaping)
/// to carry embedded commas; embedded newlines are not supported. Cells are
/// trimmed unless quoted.
pub fn parse_table(content: &str) -> Result<DecisionTable> {
    let mut lines = content.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());

    let headers = match lines.next() {
        Some((_, header_line)) => split_fields(header_line),
        None => bail!("Input is empty"),
    };

    let mut rows = Vec::new();
    for (line_no, line) in lines {
        let mut cells = split_fields(line);
        if cells.len() != headers.len() {
            bail!(
                "Line {}: expected {} columns, found {}",
                line_no + 1,
                headers.len(),
                cells.len()
            );
        }
        let id = cells.remove(0);
        rows.push(Row { id, cells });
    }

    if rows.is_empty() {
        bail!("Input has a header row but no data rows");
    }

    Ok(DecisionTable { headers, rows })
}

/// Split one CSV line into fields, honoring double quotes.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                // Doubled quote inside a quoted field is a literal quote
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields.into_iter().map(|f| f.trim().to_string()).collect()
}
