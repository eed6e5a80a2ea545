#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Objective reduction for multi-objective optimization.
//!
//! Many-objective search algorithms degrade as the number of objectives
//! grows. This crate replaces `m` original objectives with `k < m`
//! **aggregated** objectives — each a weighted sum of originals — chosen by
//! a deterministic greedy search so that the pairwise relative-ordering
//! information among a fixed sample of individuals is preserved as closely
//! as possible. The loss is quantified by the **delta error**: for every
//! pair of individuals, the discrepancy between the strongest per-objective
//! signal the originals give and the strongest signal the aggregation gives.
//!
//! # Getting Started
//!
//! Reduce three objectives to two in a few lines:
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
//! let outcome = search(&table, 2, ErrorVariant::Maximum)?;
//! assert_eq!(outcome.weights.n_groups(), 2);
//!
//! // The carried search error is advisory — always re-derive it.
//! let aggregated = aggregate(&outcome.weights, &table);
//! let truth = compute_delta_error(&aggregated, &table)?;
//! assert!(truth.average <= truth.max);
//! # Ok::<(), objective_reduction::Error>(())
//! ```
//!
//! # Core Concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`ObjectiveTable`](table::ObjectiveTable) | Immutable sample: one row per individual, one column per original objective. |
//! | [`WeightMatrix`](search::WeightMatrix) | `k × m` non-negative weights, one row per aggregated objective. |
//! | [`ErrorVariant`] | Which delta error the search minimizes: worst-case or average-case. |
//! | [`ErrorReport`] | The `(max, average)` delta error of an aggregation. |
//! | [`search`](search::search) | The greedy engine producing a [`SearchOutcome`](search::SearchOutcome). |
//! | [`compute_delta_error`](metric::compute_delta_error) | Ground-truth error of any aggregated table. |
//!
//! # The carried-error trust boundary
//!
//! The greedy engine carries an error value along for efficiency while it
//! assigns objectives to groups. That value is computed over the groups
//! populated *so far* and can diverge from the true error of the final
//! matrix (most visibly when a group ends up empty). Treat it as advisory:
//! recompute with [`compute_delta_error`](metric::compute_delta_error) over
//! the full matrix before reporting, and surface any discrepancy. The
//! [`report`] module does exactly this via
//! [`verify`](report::verify).
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on public result types, JSON report export | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) at search commit points | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod error;
pub mod loader;
pub mod metric;
pub mod report;
pub mod search;
pub mod table;
mod types;

pub use error::{Error, Result};
pub use metric::{aggregate, compute_delta_error};
pub use search::{search, SearchOutcome, WeightMatrix};
pub use table::{Individual, ObjectiveTable};
pub use types::{ErrorReport, ErrorVariant};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use objective_reduction::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::loader::{load_table, read_table};
    pub use crate::metric::{aggregate, compute_delta_error};
    pub use crate::report::{render, verify, Verification};
    pub use crate::search::{search, SearchOutcome, WeightMatrix};
    pub use crate::table::{Individual, ObjectiveTable};
    pub use crate::types::{ErrorReport, ErrorVariant};
}
