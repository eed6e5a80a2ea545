//! Core types shared across the crate.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which delta error the greedy search minimizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorVariant {
    /// Minimize the worst-case discrepancy over all pairs of individuals.
    Maximum,
    /// Minimize the mean discrepancy over all pairs of individuals.
    Average,
}

/// The delta error of an aggregation, in both flavors.
///
/// `max` is the worst-case discrepancy over all unordered pairs of
/// individuals; `average` is the arithmetic mean over the same pairs. Both
/// are non-negative, and `average <= max` always holds for a report computed
/// by [`compute_delta_error`](crate::metric::compute_delta_error).
///
/// Reports are recomputed on demand and never cached across weight-matrix
/// changes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorReport {
    /// Maximum discrepancy over all pairs.
    pub max: f64,
    /// Mean discrepancy over all pairs.
    pub average: f64,
}

impl ErrorReport {
    /// Returns the value tracked under the given variant.
    #[must_use]
    pub fn value(&self, variant: ErrorVariant) -> f64 {
        match variant {
            ErrorVariant::Maximum => self.max,
            ErrorVariant::Average => self.average,
        }
    }
}

impl core::fmt::Display for ErrorVariant {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Maximum => write!(f, "maximum"),
            Self::Average => write!(f, "average"),
        }
    }
}
