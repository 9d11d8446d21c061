use owo_colors::OwoColorize;
use std::io::IsTerminal;

use crate::scoring::ScoreResult;
use crate::table::{DecisionTable, RANK_HEADER, SCORE_HEADER};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score for display with four decimals ("0.7882")
pub fn format_score(score: f64) -> String {
    format!("{:.4}", score)
}

/// Render the augmented table for stdout: original columns plus
/// "Topsis Score" and "Rank", padded to equal width per column.
/// Identifier column left-aligned, everything else right-aligned;
/// headers bold and the rank-1 rows' rank cell green when colored.
pub fn format_ranked_table(
    table: &DecisionTable,
    result: &ScoreResult,
    use_colors: bool,
) -> String {
    let headers: Vec<String> = table
        .headers
        .iter()
        .cloned()
        .chain([SCORE_HEADER.to_string(), RANK_HEADER.to_string()])
        .collect();

    let rows: Vec<Vec<String>> = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            std::iter::once(row.id.clone())
                .chain(row.cells.iter().cloned())
                .chain([format_score(result.scores[i]), result.ranks[i].to_string()])
                .collect()
        })
        .collect();

    // Column widths over header + cells
    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in &rows {
        for (j, cell) in row.iter().enumerate() {
            widths[j] = widths[j].max(cell.len());
        }
    }

    let separator = "  ";
    let rank_col = headers.len() - 1;
    let mut lines = Vec::with_capacity(rows.len() + 1);

    let header_line = headers
        .iter()
        .enumerate()
        .map(|(j, h)| pad(h, widths[j], j == 0))
        .collect::<Vec<_>>()
        .join(separator);
    lines.push(if use_colors {
        header_line.bold().to_string()
    } else {
        header_line
    });

    for (i, row) in rows.iter().enumerate() {
        let line = row
            .iter()
            .enumerate()
            .map(|(j, cell)| {
                let padded = pad(cell, widths[j], j == 0);
                if use_colors && j == rank_col && result.ranks[i] == 1 {
                    padded.green().to_string()
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>()
            .join(separator);
        lines.push(line);
    }

    lines.join("\n")
}

fn pad(cell: &str, width: usize, left_align: bool) -> String {
    if left_align {
        format!("{:<width$}", cell, width = width)
    } else {
        format!("{:>width$}", cell, width = width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{parse_table, Row};

    fn sample() -> (DecisionTable, ScoreResult) {
        let table = parse_table("Model,Price,Storage\nM1,250,16\nM2,200,32\n").unwrap();
        let result = ScoreResult {
            scores: vec![0.21175131, 0.78824869],
            ranks: vec![2, 1],
        };
        (table, result)
    }

    #[test]
    fn test_format_score_four_decimals() {
        assert_eq!(format_score(0.78824869), "0.7882");
        assert_eq!(format_score(0.5), "0.5000");
        assert_eq!(format_score(1.0), "1.0000");
    }

    #[test]
    fn test_table_has_header_and_appended_columns() {
        let (table, result) = sample();
        let out = format_ranked_table(&table, &result, false);
        let first = out.lines().next().unwrap();
        assert!(first.contains("Model"));
        assert!(first.contains("Topsis Score"));
        assert!(first.contains("Rank"));
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_columns_are_aligned() {
        let (table, result) = sample();
        let out = format_ranked_table(&table, &result, false);
        let lines: Vec<&str> = out.lines().collect();
        // Equal-width columns make every line the same length.
        assert_eq!(lines[0].len(), lines[1].len());
        assert_eq!(lines[1].len(), lines[2].len());
    }

    #[test]
    fn test_no_ansi_codes_without_colors() {
        let (table, result) = sample();
        let out = format_ranked_table(&table, &result, false);
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_identifier_column_left_aligned() {
        let table = DecisionTable {
            headers: vec!["Model".into(), "Price".into(), "Storage".into()],
            rows: vec![
                Row {
                    id: "M1".into(),
                    cells: vec!["250".into(), "16".into()],
                },
                Row {
                    id: "LongName".into(),
                    cells: vec!["200".into(), "32".into()],
                },
            ],
        };
        let result = ScoreResult {
            scores: vec![0.4, 0.6],
            ranks: vec![2, 1],
        };
        let out = format_ranked_table(&table, &result, false);
        assert!(out.lines().nth(1).unwrap().starts_with("M1      "));
    }
}
