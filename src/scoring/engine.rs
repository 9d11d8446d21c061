use ndarray::{Array2, Axis};

use super::criteria::Impact;

/// Scores and ranks for every row of the decision matrix, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Relative closeness to the ideal solution, in [0, 1]
    pub scores: Vec<f64>,
    /// Competition rank: 1 = best, ties share a rank
    pub ranks: Vec<u32>,
}

/// Run the TOPSIS pipeline over a validated rows x criteria matrix.
///
/// Steps: normalize each column by its Euclidean norm, weight it, build the
/// ideal-best/ideal-worst points per the impact directions, then score each
/// row by `d_worst / (d_best + d_worst)`.
///
/// Degenerate conventions (validated input never fails here):
/// - an all-zero column has norm 0 and stays all-zero after normalization;
/// - a row at distance 0 from both ideal points scores 0.0, never NaN.
pub fn score(matrix: &Array2<f64>, weights: &[f64], impacts: &[Impact]) -> ScoreResult {
    let weighted = weighted_normalized(matrix, weights);
    let (ideal_best, ideal_worst) = ideal_points(&weighted, impacts);

    let scores: Vec<f64> = weighted
        .axis_iter(Axis(0))
        .map(|row| {
            let dist_best = euclidean_distance(row.iter(), &ideal_best);
            let dist_worst = euclidean_distance(row.iter(), &ideal_worst);
            let denom = dist_best + dist_worst;
            if denom == 0.0 {
                0.0
            } else {
                dist_worst / denom
            }
        })
        .collect();

    let ranks = rank_descending(&scores);

    ScoreResult { scores, ranks }
}

/// Normalize each column by its Euclidean norm, then scale by its weight.
fn weighted_normalized(matrix: &Array2<f64>, weights: &[f64]) -> Array2<f64> {
    let mut weighted = matrix.to_owned();
    for (j, mut column) in weighted.axis_iter_mut(Axis(1)).enumerate() {
        let norm = column.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            column.mapv_inplace(|v| v / norm);
        }
        let weight = weights[j];
        column.mapv_inplace(|v| v * weight);
    }
    weighted
}

/// Per-column best and worst weighted values. For a beneficial criterion the
/// best is the column max; for a cost criterion they swap.
fn ideal_points(weighted: &Array2<f64>, impacts: &[Impact]) -> (Vec<f64>, Vec<f64>) {
    let mut ideal_best = Vec::with_capacity(impacts.len());
    let mut ideal_worst = Vec::with_capacity(impacts.len());

    for (j, column) in weighted.axis_iter(Axis(1)).enumerate() {
        let max = column.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = column.iter().copied().fold(f64::INFINITY, f64::min);
        match impacts[j] {
            Impact::Beneficial => {
                ideal_best.push(max);
                ideal_worst.push(min);
            }
            Impact::Cost => {
                ideal_best.push(min);
                ideal_worst.push(max);
            }
        }
    }

    (ideal_best, ideal_worst)
}

fn euclidean_distance<'a>(row: impl Iterator<Item = &'a f64>, point: &[f64]) -> f64 {
    row.zip(point)
        .map(|(v, p)| (v - p) * (v - p))
        .sum::<f64>()
        .sqrt()
}

/// Competition ranking over descending scores: rank = 1 + number of rows
/// with a strictly greater score, so exact ties share a rank and the next
/// distinct score skips ahead.
fn rank_descending(scores: &[f64]) -> Vec<u32> {
    scores
        .iter()
        .map(|s| 1 + scores.iter().filter(|other| **other > *s).count() as u32)
        .collect()
}
