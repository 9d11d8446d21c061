use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::types::DecisionTable;
use crate::scoring::ScoreResult;

/// Header for the appended score column.
pub const SCORE_HEADER: &str = "Topsis Score";
/// Header for the appended rank column.
pub const RANK_HEADER: &str = "Rank";

/// Write the augmented table (original columns + score + rank) as CSV.
pub fn write_table(path: &Path, table: &DecisionTable, result: &ScoreResult) -> Result<()> {
    fs::write(path, to_csv(table, result))
        .with_context(|| format!("Failed to write result file at {}", path.display()))
}

/// Serialize the augmented table as CSV text.
///
/// Scores are written with full round-trip precision; identifiers and
/// headers are quoted only when they contain a comma or a quote.
pub fn to_csv(table: &DecisionTable, result: &ScoreResult) -> String {
    let mut out = String::new();

    let header_cells: Vec<&str> = table
        .headers
        .iter()
        .map(String::as_str)
        .chain([SCORE_HEADER, RANK_HEADER])
        .collect();
    push_line(&mut out, &header_cells);

    for (i, row) in table.rows.iter().enumerate() {
        let score = format!("{}", result.scores[i]);
        let rank = format!("{}", result.ranks[i]);
        let cells: Vec<&str> = std::iter::once(row.id.as_str())
            .chain(row.cells.iter().map(String::as_str))
            .chain([score.as_str(), rank.as_str()])
            .collect();
        push_line(&mut out, &cells);
    }

    out
}

fn push_line(out: &mut String, cells: &[&str]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&quote_cell(cell));
    }
    out.push('\n');
}

fn quote_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}
