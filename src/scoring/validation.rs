use ndarray::Array2;
use thiserror::Error;

use super::criteria::Impact;
use crate::table::DecisionTable;

/// A validation failure. Every variant is detected before any numeric
/// computation begins; the scorer never sees malformed input.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("input must contain at least three columns (found {found})")]
    TooFewColumns { found: usize },

    #[error("column '{column}' must contain numeric values only (row {row} has '{value}')")]
    NonNumericCell {
        column: String,
        row: usize,
        value: String,
    },

    #[error("weights must be numeric values separated by commas (bad token '{token}')")]
    BadWeight { token: String },

    #[error(
        "the number of weights ({weights}) and impacts ({impacts}) must match the number of \
         criterion columns ({criteria})"
    )]
    CountMismatch {
        criteria: usize,
        weights: usize,
        impacts: usize,
    },

    #[error("impacts must be either '+' or '-' (bad token '{token}')")]
    BadImpact { token: String },
}

/// Everything the scorer needs, fully typed and shape-checked.
#[derive(Debug, Clone)]
pub struct ValidatedInput {
    /// rows x criteria matrix of criterion values
    pub matrix: Array2<f64>,
    pub weights: Vec<f64>,
    pub impacts: Vec<Impact>,
}

/// Validate the raw decision table plus the raw weight/impact strings.
///
/// Checks run in a fixed order: column count, numeric cells, weight
/// parsing, impact parsing, arity match, impact vocabulary. The first
/// failed check aborts the run; there is no partial result.
pub fn validate(
    table: &DecisionTable,
    weights_text: &str,
    impacts_text: &str,
) -> Result<ValidatedInput, ValidationError> {
    if table.column_count() < 3 {
        return Err(ValidationError::TooFewColumns {
            found: table.column_count(),
        });
    }

    let criteria = table.criteria_count();
    let mut parsed = Vec::with_capacity(table.rows.len());
    for (i, row) in table.rows.iter().enumerate() {
        let mut values = Vec::with_capacity(criteria);
        for (j, cell) in row.cells.iter().enumerate() {
            match cell.parse::<f64>() {
                Ok(v) if v.is_finite() => values.push(v),
                _ => {
                    return Err(ValidationError::NonNumericCell {
                        column: table.headers[j + 1].clone(),
                        row: i + 1,
                        value: cell.clone(),
                    })
                }
            }
        }
        parsed.push(values);
    }

    let weights = parse_weights(weights_text)?;
    let impact_tokens: Vec<&str> = impacts_text.split(',').collect();

    if weights.len() != criteria || impact_tokens.len() != criteria {
        return Err(ValidationError::CountMismatch {
            criteria,
            weights: weights.len(),
            impacts: impact_tokens.len(),
        });
    }

    let impacts = impact_tokens
        .iter()
        .map(|t| Impact::parse(t))
        .collect::<Result<Vec<_>, _>>()?;

    let matrix = Array2::from_shape_fn((parsed.len(), criteria), |(i, j)| parsed[i][j]);

    Ok(ValidatedInput {
        matrix,
        weights,
        impacts,
    })
}

fn parse_weights(weights_text: &str) -> Result<Vec<f64>, ValidationError> {
    weights_text
        .split(',')
        .map(|token| {
            token
                .trim()
                .parse::<f64>()
                .map_err(|_| ValidationError::BadWeight {
                    token: token.trim().to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::parse_table;

    fn sample_table() -> DecisionTable {
        parse_table("Model,Price,Storage\nM1,250,16\nM2,200,32\nM3,300,32\n").unwrap()
    }

    #[test]
    fn test_valid_input() {
        let input = validate(&sample_table(), "0.5,0.5", "-,+").unwrap();
        assert_eq!(input.matrix.dim(), (3, 2));
        assert_eq!(input.matrix[[1, 0]], 200.0);
        assert_eq!(input.weights, vec![0.5, 0.5]);
        assert_eq!(input.impacts, vec![Impact::Cost, Impact::Beneficial]);
    }

    #[test]
    fn test_weights_tolerate_spaces() {
        let input = validate(&sample_table(), "1, 2", " -, + ").unwrap();
        assert_eq!(input.weights, vec![1.0, 2.0]);
        assert_eq!(input.impacts, vec![Impact::Cost, Impact::Beneficial]);
    }

    #[test]
    fn test_two_columns_is_a_shape_error() {
        let table = parse_table("Model,Price\nM1,250\n").unwrap();
        let err = validate(&table, "1", "+").unwrap_err();
        assert_eq!(err, ValidationError::TooFewColumns { found: 2 });
    }

    #[test]
    fn test_three_columns_is_the_minimum_and_passes() {
        assert!(validate(&sample_table(), "1,1", "+,+").is_ok());
    }

    #[test]
    fn test_non_numeric_cell() {
        let table = parse_table("Model,Price,Storage\nM1,250,16\nM2,cheap,32\n").unwrap();
        let err = validate(&table, "1,1", "+,+").unwrap_err();
        assert_eq!(
            err,
            ValidationError::NonNumericCell {
                column: "Price".into(),
                row: 2,
                value: "cheap".into(),
            }
        );
    }

    #[test]
    fn test_non_finite_cell_rejected() {
        let table = parse_table("Model,Price,Storage\nM1,inf,16\n").unwrap();
        let err = validate(&table, "1,1", "+,+").unwrap_err();
        assert!(matches!(err, ValidationError::NonNumericCell { .. }));
    }

    #[test]
    fn test_malformed_weight_token() {
        let err = validate(&sample_table(), "1,abc", "+,-").unwrap_err();
        assert_eq!(err, ValidationError::BadWeight { token: "abc".into() });
    }

    #[test]
    fn test_weight_count_mismatch() {
        let err = validate(&sample_table(), "1,1,1", "+,-").unwrap_err();
        assert_eq!(
            err,
            ValidationError::CountMismatch {
                criteria: 2,
                weights: 3,
                impacts: 2,
            }
        );
    }

    #[test]
    fn test_impact_count_mismatch() {
        let err = validate(&sample_table(), "1,1", "+").unwrap_err();
        assert_eq!(
            err,
            ValidationError::CountMismatch {
                criteria: 2,
                weights: 2,
                impacts: 1,
            }
        );
    }

    #[test]
    fn test_unknown_impact_symbol() {
        let err = validate(&sample_table(), "1,1", "+,max").unwrap_err();
        assert_eq!(err, ValidationError::BadImpact { token: "max".into() });
    }

    #[test]
    fn test_checks_run_in_order() {
        // Bad cells, bad weights and bad impacts at once: the cell check
        // fires first.
        let table = parse_table("Model,Price,Storage\nM1,x,y\n").unwrap();
        let err = validate(&table, "a,b", "?,?").unwrap_err();
        assert!(matches!(err, ValidationError::NonNumericCell { .. }));
    }
}
