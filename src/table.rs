//! The immutable objective table: one row per individual, one column per
//! original objective.
//!
//! An [`ObjectiveTable`] is the read-only input of a reduction run. It is
//! validated once at construction — rectangular, at least 2 objective
//! columns, at least one row — and never mutated afterwards. Loading a table
//! from the whitespace-delimited individual file format lives in
//! [`loader`](crate::loader).

use crate::error::{Error, Result};

/// One sampled candidate solution: an opaque identifier plus its `m`
/// original objective values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// The opaque, unique identifier from the input data.
    pub id: String,
    /// The original objective values, in column order.
    pub values: Vec<f64>,
}

/// An immutable table of individuals sharing the same objective count.
///
/// # Examples
///
/// ```
/// use objective_reduction::ObjectiveTable;
///
/// let table = ObjectiveTable::from_rows(vec![
///     ("a".into(), vec![1.0, 2.0]),
///     ("b".into(), vec![3.0, 4.0]),
/// ])?;
/// assert_eq!(table.n_individuals(), 2);
/// assert_eq!(table.n_objectives(), 2);
/// assert_eq!(table.value(1, 0), 3.0);
/// # Ok::<(), objective_reduction::Error>(())
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObjectiveTable {
    individuals: Vec<Individual>,
    n_objectives: usize,
}

impl ObjectiveTable {
    /// Builds a table from `(identifier, values)` rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyTable`] for zero rows,
    /// [`Error::TooFewObjectives`] when the first row has fewer than 2
    /// values, and [`Error::RaggedRow`] when any later row's length
    /// disagrees with the first.
    pub fn from_rows(rows: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(Error::EmptyTable);
        };

        let n_objectives = first.1.len();
        if n_objectives < 2 {
            return Err(Error::TooFewObjectives { got: n_objectives });
        }

        for (row, (_, values)) in rows.iter().enumerate() {
            if values.len() != n_objectives {
                return Err(Error::RaggedRow {
                    row,
                    expected: n_objectives,
                    got: values.len(),
                });
            }
        }

        let individuals = rows
            .into_iter()
            .map(|(id, values)| Individual { id, values })
            .collect();

        Ok(Self {
            individuals,
            n_objectives,
        })
    }

    /// Returns the number of individuals `n`.
    #[must_use]
    pub fn n_individuals(&self) -> usize {
        self.individuals.len()
    }

    /// Returns the number of original objectives `m`.
    #[must_use]
    pub fn n_objectives(&self) -> usize {
        self.n_objectives
    }

    /// Returns objective value `l` of individual `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_individuals()` or `l >= n_objectives()`.
    #[must_use]
    pub fn value(&self, i: usize, l: usize) -> f64 {
        self.individuals[i].values[l]
    }

    /// Returns the full objective row of individual `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_individuals()`.
    #[must_use]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.individuals[i].values
    }

    /// Returns individual `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= n_individuals()`.
    #[must_use]
    pub fn individual(&self, i: usize) -> &Individual {
        &self.individuals[i]
    }

    /// Iterates over the individuals in row order.
    pub fn iter(&self) -> core::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }
}

impl<'a> IntoIterator for &'a ObjectiveTable {
    type Item = &'a Individual;
    type IntoIter = core::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(values: &[&[f64]]) -> Vec<(String, Vec<f64>)> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| (format!("ind{i}"), v.to_vec()))
            .collect()
    }

    #[test]
    fn test_construction_and_access() {
        let table = ObjectiveTable::from_rows(rows(&[&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]])).unwrap();
        assert_eq!(table.n_individuals(), 2);
        assert_eq!(table.n_objectives(), 3);
        assert_eq!(table.value(0, 2), 3.0);
        assert_eq!(table.row(1), &[4.0, 5.0, 6.0]);
        assert_eq!(table.individual(0).id, "ind0");
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = ObjectiveTable::from_rows(Vec::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyTable));
    }

    #[test]
    fn test_single_objective_rejected() {
        let err = ObjectiveTable::from_rows(rows(&[&[1.0], &[2.0]])).unwrap_err();
        assert!(matches!(err, Error::TooFewObjectives { got: 1 }));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = ObjectiveTable::from_rows(rows(&[&[1.0, 2.0], &[3.0]])).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRow {
                row: 1,
                expected: 2,
                got: 1
            }
        ));
    }

    #[test]
    fn test_iteration_order_is_row_order() {
        let table = ObjectiveTable::from_rows(rows(&[&[1.0, 0.0], &[0.0, 1.0]])).unwrap();
        let ids: Vec<&str> = table.iter().map(|ind| ind.id.as_str()).collect();
        assert_eq!(ids, vec!["ind0", "ind1"]);
    }
}
