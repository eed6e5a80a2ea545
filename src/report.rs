//! Driver-side verification and reporting.
//!
//! The search's carried error is advisory ([`search`](crate::search)
//! module docs); before anything is shown to a user, [`verify`]
//! re-derives the aggregated table from the full weight matrix and
//! recomputes the delta error from scratch. Any discrepancy between the
//! carried and recomputed values is flagged, and [`render`] marks the
//! affected numbers with `*` plus an explicit recomputation warning —
//! surfaced, never silently reconciled.

use core::fmt::Write as _;

use crate::error::Result;
use crate::metric::{aggregate, compute_delta_error};
use crate::search::SearchOutcome;
use crate::table::ObjectiveTable;
use crate::types::{ErrorReport, ErrorVariant};

/// The outcome of independently re-deriving a search's error.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verification {
    /// The ground-truth error of the full weight matrix.
    pub recomputed: ErrorReport,
    /// `true` if the carried maximum error disagrees with the recomputed one.
    pub max_drifted: bool,
    /// `true` if the carried average error disagrees with the recomputed one.
    pub average_drifted: bool,
}

impl Verification {
    /// Returns `true` if either carried value drifted from ground truth.
    #[must_use]
    pub fn any_drift(&self) -> bool {
        self.max_drifted || self.average_drifted
    }
}

/// Recomputes the delta error of `outcome`'s full weight matrix over
/// `table` and compares it against the carried values.
///
/// Comparison is exact: any divergence, however small, is flagged. The
/// carried value is a bookkeeping approximation, so disagreement means it
/// must be distrusted for this run — the recomputed report is the one to
/// show.
///
/// # Errors
///
/// Propagates the validation errors of
/// [`compute_delta_error`](crate::metric::compute_delta_error).
pub fn verify(outcome: &SearchOutcome, table: &ObjectiveTable) -> Result<Verification> {
    let aggregated = aggregate(&outcome.weights, table);
    let recomputed = compute_delta_error(&aggregated, table)?;

    #[allow(clippy::float_cmp)]
    let verification = Verification {
        recomputed,
        max_drifted: recomputed.max != outcome.error.max,
        average_drifted: recomputed.average != outcome.error.average,
    };

    trace_debug!(
        max = verification.recomputed.max,
        average = verification.recomputed.average,
        drifted = verification.any_drift(),
        "search error re-verified"
    );

    Ok(verification)
}

/// Formats the human-readable result report.
///
/// The report names the group count and optimized variant, prints the
/// recomputed overall and average delta values (starred, with a warning
/// line, when the carried value drifted), lists one weight row per
/// aggregated objective, and closes with the elapsed wall time measured by
/// the driver.
#[must_use]
pub fn render(
    outcome: &SearchOutcome,
    verification: &Verification,
    variant: ErrorVariant,
    elapsed_ms: u128,
) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Greedy algorithm for finding the best aggregation with {} objectives",
        outcome.weights.n_groups()
    );
    match variant {
        ErrorVariant::Maximum => {
            let _ = writeln!(out, " where the overall maximum delta error is optimized.");
        }
        ErrorVariant::Average => {
            let _ = writeln!(
                out,
                " where the delta error averaged over all solution pairs is optimized."
            );
        }
    }
    let _ = writeln!(out);

    let star = |drifted: bool| if drifted { " *" } else { "" };
    let _ = writeln!(
        out,
        "Gives an overall error of delta = {}{}",
        verification.recomputed.max,
        star(verification.max_drifted)
    );
    let _ = writeln!(
        out,
        "  and an average error of delta = {}{}",
        verification.recomputed.average,
        star(verification.average_drifted)
    );
    if verification.any_drift() {
        let _ = writeln!(
            out,
            "* error has been incorrectly carried along during algorithm and has been recomputed in the end"
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Weights for the aggregated objectives:");
    for (j, row) in outcome.weights.rows().iter().enumerate() {
        let mut line = String::new();
        for weight in row {
            let _ = write!(line, "{weight} ");
        }
        let _ = writeln!(out, "{line}");
        let _ = writeln!(out, " ...aggregated objective {j}");
    }

    let _ = writeln!(
        out,
        "Elapsed time during computation: {elapsed_ms} milliseconds"
    );

    out
}

/// Serializes the outcome and its verification as a JSON document.
///
/// # Errors
///
/// Returns a `serde_json` error if serialization fails.
#[cfg(feature = "serde")]
pub fn to_json(
    outcome: &SearchOutcome,
    verification: &Verification,
    variant: ErrorVariant,
) -> serde_json::Result<String> {
    #[derive(serde::Serialize)]
    struct Document<'a> {
        variant: ErrorVariant,
        weights: &'a crate::search::WeightMatrix,
        carried_error: ErrorReport,
        recomputed_error: ErrorReport,
        max_drifted: bool,
        average_drifted: bool,
    }

    serde_json::to_string_pretty(&Document {
        variant,
        weights: &outcome.weights,
        carried_error: outcome.error,
        recomputed_error: verification.recomputed,
        max_drifted: verification.max_drifted,
        average_drifted: verification.average_drifted,
    })
}
