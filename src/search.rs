//! The greedy aggregation-search engine.
//!
//! Given an [`ObjectiveTable`] with `m` original objectives and a target
//! count `k`, [`search`] looks for a `k × m` [`WeightMatrix`] whose
//! aggregated objectives preserve the table's pairwise ordering information
//! as measured by the delta error ([`metric`](crate::metric)). The search
//! space — all ways of partitioning `m` objectives into `k` weighted groups
//! — is combinatorially explosive, so the engine is deliberately greedy:
//! locally optimal, deterministic, and reproducible, with no randomness and
//! no global-optimality guarantee.
//!
//! # Algorithm
//!
//! 1. Start from `k` empty aggregated-objective groups.
//! 2. Take the original objectives one at a time, in ascending index order.
//!    For each objective, trial-assign it to every group in turn with an
//!    additive unit weight, score each trial with the delta error of the
//!    groups populated so far, and keep the best score under the active
//!    [`ErrorVariant`]. Ties keep the earliest candidate: lowest group
//!    index first, and an earlier winning assignment is never displaced by
//!    a later equal one.
//! 3. Commit the winning assignment and move to the next objective. Trial
//!    evaluations only ever read the committed state; commits are strictly
//!    sequential, which is what makes the tie-break order reproducible.
//! 4. After all `m` objectives are assigned, the matrix and the error
//!    carried from the last commit are returned.
//!
//! Each of the `O(m · k)` assignment decisions pays an `O(n² · (m + k))`
//! delta-error evaluation; that product is the dominant cost of the whole
//! run.
//!
//! # The carried error is advisory
//!
//! The error in the returned [`SearchOutcome`] is the one the engine
//! carried along for its last commit. It is computed over the groups that
//! were non-empty at that point, while the ground truth of the final
//! matrix spans all `k` rows — the two can diverge (most visibly when a
//! group ends up empty). Always recompute via
//! [`compute_delta_error`](crate::metric::compute_delta_error) before
//! reporting, and surface any discrepancy;
//! [`report::verify`](crate::report::verify) packages that check.
//!
//! # Example
//!
//! ```
//! use objective_reduction::prelude::*;
//!
//! let table = ObjectiveTable::from_rows(vec![
//!     ("a".into(), vec![1.0, 0.0, 0.0]),
//!     ("b".into(), vec![0.0, 1.0, 0.0]),
//!     ("c".into(), vec![0.0, 0.0, 1.0]),
//!     ("d".into(), vec![1.0, 1.0, 1.0]),
//! ])?;
//!
//! // k = m keeps every objective in its own group: nothing is lost.
//! let outcome = search(&table, 3, ErrorVariant::Maximum)?;
//! assert_eq!(outcome.error.max, 0.0);
//! # Ok::<(), objective_reduction::Error>(())
//! ```

use crate::error::{Error, Result};
use crate::metric::{aggregate_rows, compute_delta_error};
use crate::table::ObjectiveTable;
use crate::types::{ErrorReport, ErrorVariant};

/// A `k × m` matrix of non-negative weights, one row per aggregated
/// objective.
///
/// Row `j` defines aggregated objective `j` as the weighted sum
/// `Σ_l weight(j, l) * original(l)`. Rows are not normalized. Every column
/// carries positive weight in at least one row — the search assigns every
/// original objective to exactly one group, so no objective is silently
/// discarded.
///
/// Produced by [`search`] and immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightMatrix {
    rows: Vec<Vec<f64>>,
    n_objectives: usize,
}

impl WeightMatrix {
    /// Returns the number of aggregated objectives `k`.
    #[must_use]
    pub fn n_groups(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of original objectives `m`.
    #[must_use]
    pub fn n_objectives(&self) -> usize {
        self.n_objectives
    }

    /// Returns the weight of original objective `l` in aggregated
    /// objective `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= n_groups()` or `l >= n_objectives()`.
    #[must_use]
    pub fn weight(&self, j: usize, l: usize) -> f64 {
        self.rows[j][l]
    }

    /// Returns all weight rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Returns the weight row of aggregated objective `j`.
    ///
    /// # Panics
    ///
    /// Panics if `j >= n_groups()`.
    #[must_use]
    pub fn row(&self, j: usize) -> &[f64] {
        &self.rows[j]
    }

    /// Returns `true` if original objective `l` has positive weight in at
    /// least one row.
    ///
    /// # Panics
    ///
    /// Panics if `l >= n_objectives()`.
    #[must_use]
    pub fn covers(&self, l: usize) -> bool {
        self.rows.iter().any(|row| row[l] > 0.0)
    }
}

/// Accumulates committed assignments during the search.
///
/// Trial evaluations read compacted snapshots of the committed state
/// ([`trial_rows`](Self::trial_rows)); only [`commit`](Self::commit)
/// mutates. The split keeps every trial in a round scoring against the
/// same stable prior state, so evaluation order cannot leak into the
/// result.
struct WeightMatrixBuilder {
    rows: Vec<Vec<f64>>,
    populated: Vec<bool>,
}

impl WeightMatrixBuilder {
    fn new(k: usize, m: usize) -> Self {
        Self {
            rows: vec![vec![0.0; m]; k],
            populated: vec![false; k],
        }
    }

    /// The weight rows a trial assignment of `objective` to `group` would
    /// produce, restricted to groups that are populated (or being
    /// populated by this trial). An untouched group defines no synthetic
    /// objective yet; letting its all-zero row into the trial metric would
    /// inject a constant-zero signal and distort the score.
    fn trial_rows(&self, objective: usize, group: usize) -> Vec<Vec<f64>> {
        let mut rows = Vec::with_capacity(self.populated.iter().filter(|&&p| p).count() + 1);
        for (g, row) in self.rows.iter().enumerate() {
            if g == group {
                let mut trial = row.clone();
                trial[objective] += 1.0;
                rows.push(trial);
            } else if self.populated[g] {
                rows.push(row.clone());
            }
        }
        rows
    }

    fn commit(&mut self, objective: usize, group: usize) {
        self.rows[group][objective] += 1.0;
        self.populated[group] = true;
    }

    fn finish(self, m: usize) -> WeightMatrix {
        WeightMatrix {
            rows: self.rows,
            n_objectives: m,
        }
    }
}

/// The result of a greedy aggregation search.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    /// The weight matrix the search committed to.
    pub weights: WeightMatrix,
    /// The error carried from the last commit. Advisory — see the
    /// [module docs](self) for why this must be recomputed before use.
    pub error: ErrorReport,
}

/// Runs the greedy aggregation search.
///
/// Finds a `k × m` weight matrix approximately minimizing the delta error
/// under `variant`, by assigning original objectives to groups one at a
/// time in index order and keeping the locally best group per objective.
/// Deterministic: same inputs, same matrix, same carried error.
///
/// Total cost is `O(m · k)` assignment decisions, each paying an
/// `O(n² · (m + k))` delta-error evaluation.
///
/// # Errors
///
/// Returns [`Error::InvalidGroupCount`] when `k` is outside `[1, m]` and
/// [`Error::TooFewIndividuals`] when the table has fewer than 2 rows.
/// Both are raised before the search loop runs; no partial matrix is ever
/// exposed on failure.
pub fn search(table: &ObjectiveTable, k: usize, variant: ErrorVariant) -> Result<SearchOutcome> {
    let m = table.n_objectives();
    let n = table.n_individuals();

    if !(1..=m).contains(&k) {
        return Err(Error::InvalidGroupCount { k, m });
    }
    if n < 2 {
        return Err(Error::TooFewIndividuals { got: n });
    }

    trace_info!(k, m, n, %variant, "aggregation search started");

    let mut builder = WeightMatrixBuilder::new(k, m);
    let mut carried = ErrorReport {
        max: f64::INFINITY,
        average: f64::INFINITY,
    };

    for objective in 0..m {
        let mut best: Option<(usize, ErrorReport)> = None;

        for group in 0..k {
            let rows = builder.trial_rows(objective, group);
            let aggregated = aggregate_rows(&rows, table);
            let report = compute_delta_error(&aggregated, table)?;

            trace_debug!(
                objective,
                group,
                error = report.value(variant),
                "trial assignment scored"
            );

            // Strict improvement only: ties keep the lowest group index.
            let improves = match &best {
                Some((_, incumbent)) => report.value(variant) < incumbent.value(variant),
                None => true,
            };
            if improves {
                best = Some((group, report));
            }
        }

        // k >= 1, so every objective scores at least one candidate.
        if let Some((group, report)) = best {
            builder.commit(objective, group);
            carried = report;
            trace_info!(
                objective,
                group,
                error = report.value(variant),
                "objective assigned"
            );
        }
    }

    trace_info!(
        max = carried.max,
        average = carried.average,
        "aggregation search finished"
    );

    Ok(SearchOutcome {
        weights: builder.finish(m),
        error: carried,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metric::aggregate;

    fn table(values: &[&[f64]]) -> ObjectiveTable {
        ObjectiveTable::from_rows(
            values
                .iter()
                .enumerate()
                .map(|(i, v)| (format!("ind{i}"), v.to_vec()))
                .collect(),
        )
        .unwrap()
    }

    fn unit_simplex_table() -> ObjectiveTable {
        table(&[
            &[1.0, 0.0, 0.0],
            &[0.0, 1.0, 0.0],
            &[0.0, 0.0, 1.0],
            &[1.0, 1.0, 1.0],
        ])
    }

    #[test]
    fn test_builder_trial_rows_skip_untouched_groups() {
        let mut builder = WeightMatrixBuilder::new(3, 2);

        // Nothing committed: only the trial group appears.
        let rows = builder.trial_rows(0, 1);
        assert_eq!(rows, vec![vec![1.0, 0.0]]);

        builder.commit(0, 1);

        // Group 1 committed, group 0 still empty: trial on group 0 sees both.
        let rows = builder.trial_rows(1, 0);
        assert_eq!(rows, vec![vec![0.0, 1.0], vec![1.0, 0.0]]);

        // Trial on the committed group accumulates additively.
        let rows = builder.trial_rows(1, 1);
        assert_eq!(rows, vec![vec![1.0, 1.0]]);
    }

    #[test]
    fn test_builder_commit_does_not_leak_into_prior_snapshot() {
        let mut builder = WeightMatrixBuilder::new(2, 2);
        let before = builder.trial_rows(0, 0);
        builder.commit(1, 1);
        // The snapshot taken before the commit is untouched.
        assert_eq!(before, vec![vec![1.0, 0.0]]);
    }

    #[test]
    fn test_k_equals_m_is_identity_with_zero_error() {
        let t = unit_simplex_table();
        let outcome = search(&t, 3, ErrorVariant::Maximum).unwrap();

        for l in 0..3 {
            let populated: Vec<usize> = (0..3)
                .filter(|&j| outcome.weights.weight(j, l) > 0.0)
                .collect();
            assert_eq!(populated.len(), 1, "objective {l} in exactly one group");
            assert_eq!(outcome.weights.weight(populated[0], l), 1.0);
        }
        assert_eq!(outcome.error.max, 0.0);
        assert_eq!(outcome.error.average, 0.0);

        let truth = compute_delta_error(&aggregate(&outcome.weights, &t), &t).unwrap();
        assert_eq!(truth.max, 0.0);
        assert_eq!(truth.average, 0.0);
    }

    #[test]
    fn test_k_equals_one_collects_every_objective() {
        let t = unit_simplex_table();
        let outcome = search(&t, 1, ErrorVariant::Maximum).unwrap();
        assert_eq!(outcome.weights.n_groups(), 1);
        assert_eq!(outcome.weights.row(0), &[1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_k_two_groups_pair_and_singleton() {
        // Assignment order 0, 1, 2 with lowest-group-index tie-breaks:
        // objective 0 lands in group 0, objective 1 strictly prefers the
        // fresh group 1, objective 2 ties and stays in group 0.
        let t = unit_simplex_table();
        let outcome = search(&t, 2, ErrorVariant::Maximum).unwrap();

        assert_eq!(outcome.weights.row(0), &[1.0, 0.0, 1.0]);
        assert_eq!(outcome.weights.row(1), &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_every_objective_covered() {
        let t = table(&[
            &[0.3, 1.2, 0.0, 4.0],
            &[1.1, 0.2, 2.0, 0.5],
            &[0.0, 0.0, 1.0, 1.0],
        ]);
        for k in 1..=4 {
            for variant in [ErrorVariant::Maximum, ErrorVariant::Average] {
                let outcome = search(&t, k, variant).unwrap();
                for l in 0..4 {
                    assert!(outcome.weights.covers(l), "k={k} objective {l} covered");
                }
            }
        }
    }

    #[test]
    fn test_invalid_k_rejected_before_search() {
        let t = unit_simplex_table();
        for k in [0, 4] {
            let err = search(&t, k, ErrorVariant::Maximum).unwrap_err();
            assert!(matches!(err, Error::InvalidGroupCount { k: got, m: 3 } if got == k));
        }
    }

    #[test]
    fn test_single_individual_rejected() {
        let t = table(&[&[1.0, 2.0]]);
        let err = search(&t, 1, ErrorVariant::Maximum).unwrap_err();
        assert!(matches!(err, Error::TooFewIndividuals { got: 1 }));
    }

    #[test]
    fn test_deterministic() {
        let t = table(&[&[0.1, 0.9, 0.4], &[0.8, 0.3, 0.2], &[0.5, 0.5, 0.9]]);
        let first = search(&t, 2, ErrorVariant::Average).unwrap();
        let second = search(&t, 2, ErrorVariant::Average).unwrap();
        assert_eq!(first.weights, second.weights);
        assert_eq!(first.error, second.error);
    }

    #[test]
    fn test_average_variant_splits_scenario_table() {
        // Under the average variant the k=2 grouping of the scenario table
        // is strictly better than the k=1 collapse, so the carried average
        // must beat the single-group average of 1.5.
        let t = unit_simplex_table();
        let outcome = search(&t, 2, ErrorVariant::Average).unwrap();
        let truth = compute_delta_error(&aggregate(&outcome.weights, &t), &t).unwrap();
        assert!(truth.average < 1.5);
    }
}
