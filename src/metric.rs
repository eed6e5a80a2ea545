//! Delta-error computation: how much pairwise ordering information an
//! aggregation loses.
//!
//! In multi-objective comparison, the relation between two individuals `x`
//! and `y` is derived from the per-objective signed differences
//! `value(x) − value(y)`; the **strongest signal** of the pair is the
//! maximum of those differences over all objectives. An aggregation is
//! faithful for a pair when it reproduces that strongest signal. The
//! **delta error** of a pair is the discrepancy between the strongest
//! signal under the original objectives and under the aggregated ones,
//! taken over both orientations of the pair (the signal is signed, so an
//! unordered pair is scored by its worse orientation).
//!
//! # Available functions
//!
//! | Function | Purpose |
//! |---|---|
//! | [`aggregate`] | Derive the `n × k` aggregated table of a weight matrix |
//! | [`compute_delta_error`] | Score an aggregated table against the original: `(max, average)` over all pairs |
//!
//! Both are pure: same inputs, same outputs, no hidden state. A report is
//! only meaningful for the weight matrix it was computed from — recompute
//! whenever the weights change.
//!
//! # Example
//!
//! ```
//! use objective_reduction::prelude::*;
//!
//! let table = ObjectiveTable::from_rows(vec![
//!     ("a".into(), vec![1.0, 0.0]),
//!     ("b".into(), vec![0.0, 1.0]),
//! ])?;
//!
//! // Identity aggregation loses nothing.
//! let outcome = search(&table, 2, ErrorVariant::Maximum)?;
//! let aggregated = aggregate(&outcome.weights, &table);
//! let report = compute_delta_error(&aggregated, &table)?;
//! assert_eq!(report.max, 0.0);
//! assert_eq!(report.average, 0.0);
//! # Ok::<(), objective_reduction::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::search::WeightMatrix;
use crate::table::ObjectiveTable;
use crate::types::ErrorReport;

/// The strongest relative signal of the ordered pair `(a, b)`: the maximum
/// signed difference `a[l] - b[l]` over all objectives.
pub(crate) fn strongest_signal(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b.iter())
        .map(|(&av, &bv)| av - bv)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// The delta error of one unordered pair: the larger discrepancy between
/// original and aggregated strongest signals over the two orientations.
pub(crate) fn pair_discrepancy(
    original_x: &[f64],
    original_y: &[f64],
    aggregated_x: &[f64],
    aggregated_y: &[f64],
) -> f64 {
    let forward =
        (strongest_signal(original_x, original_y) - strongest_signal(aggregated_x, aggregated_y))
            .abs();
    let backward =
        (strongest_signal(original_y, original_x) - strongest_signal(aggregated_y, aggregated_x))
            .abs();
    forward.max(backward)
}

/// Derives the aggregated table of `weights` over `table`.
///
/// Row `i`, column `j` of the result is `Σ_l weights[j][l] * table[i][l]` —
/// a plain weighted sum, not a normalized average. All `k` rows of the
/// matrix contribute a column, including rows that happen to be all-zero;
/// this is the ground-truth shape the search's carried error must be
/// checked against.
#[must_use]
pub fn aggregate(weights: &WeightMatrix, table: &ObjectiveTable) -> Vec<Vec<f64>> {
    aggregate_rows(weights.rows(), table)
}

/// Aggregation over raw weight rows, shared with the search's trial
/// evaluation (which scores a compacted subset of rows).
pub(crate) fn aggregate_rows(weight_rows: &[Vec<f64>], table: &ObjectiveTable) -> Vec<Vec<f64>> {
    table
        .iter()
        .map(|individual| {
            weight_rows
                .iter()
                .map(|row| {
                    row.iter()
                        .zip(individual.values.iter())
                        .map(|(&w, &v)| w * v)
                        .sum()
                })
                .collect()
        })
        .collect()
}

/// Computes the delta error of `aggregated` against `table`.
///
/// For every unordered pair of individuals the per-pair discrepancy is the
/// absolute difference between the strongest original signal and the
/// strongest aggregated signal, over both orientations of the pair.
/// `max` is the worst pair, `average` the mean over all pairs.
///
/// Complexity: `O(n² · (m + k))` for `n` individuals, `m` original and `k`
/// aggregated objectives.
///
/// # Errors
///
/// Returns [`Error::TooFewIndividuals`] when `table` has fewer than 2 rows
/// (zero pairs is a validation failure, not a zero-error success) and
/// [`Error::RowCountMismatch`] when `aggregated` and `table` disagree on
/// the number of rows.
#[allow(clippy::cast_precision_loss)]
pub fn compute_delta_error(aggregated: &[Vec<f64>], table: &ObjectiveTable) -> Result<ErrorReport> {
    let n = table.n_individuals();
    if n < 2 {
        return Err(Error::TooFewIndividuals { got: n });
    }
    if aggregated.len() != n {
        return Err(Error::RowCountMismatch {
            expected: n,
            got: aggregated.len(),
        });
    }

    let mut max = 0.0_f64;
    let mut sum = 0.0_f64;
    for x in 0..n {
        for y in (x + 1)..n {
            let e = pair_discrepancy(table.row(x), table.row(y), &aggregated[x], &aggregated[y]);
            max = max.max(e);
            sum += e;
        }
    }

    let n_pairs = (n * (n - 1) / 2) as f64;
    Ok(ErrorReport {
        max,
        average: sum / n_pairs,
    })
}
