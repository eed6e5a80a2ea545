//! Loading individuals from the whitespace-delimited file format.
//!
//! One line per individual: the first field is an opaque identifier, the
//! remaining fields are numeric objective values. Blank lines are skipped.
//!
//! ```text
//! ind-00 0.25 1.75 3.00
//! ind-01 1.00 0.50 2.25
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};
use crate::table::ObjectiveTable;

/// Reads an [`ObjectiveTable`] from a file.
///
/// # Errors
///
/// Returns [`Error::Io`] when the file cannot be opened or read,
/// [`Error::ParseValue`]/[`Error::MissingValues`] for malformed lines, and
/// the table-construction errors of
/// [`ObjectiveTable::from_rows`] for empty, ragged, or
/// single-objective data.
pub fn load_table(path: impl AsRef<Path>) -> Result<ObjectiveTable> {
    let file = File::open(path.as_ref()).map_err(|e| Error::Io(e.to_string()))?;
    read_table(BufReader::new(file))
}

/// Reads an [`ObjectiveTable`] from any buffered reader.
///
/// Same contract as [`load_table`]; split out so tests and callers can
/// feed in-memory data.
///
/// # Errors
///
/// See [`load_table`].
pub fn read_table(reader: impl BufRead) -> Result<ObjectiveTable> {
    let mut rows = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::Io(e.to_string()))?;
        let mut fields = line.split_whitespace();

        let Some(id) = fields.next() else {
            continue; // blank line
        };

        let line_number = index + 1;
        let values = fields
            .map(|token| {
                token.parse::<f64>().map_err(|_| Error::ParseValue {
                    line: line_number,
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<f64>>>()?;

        if values.is_empty() {
            return Err(Error::MissingValues { line: line_number });
        }

        rows.push((id.to_owned(), values));
    }

    ObjectiveTable::from_rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_well_formed() {
        let data = "a 1.0 2.0 3.0\nb 4.0 5.0 6.0\n";
        let table = read_table(data.as_bytes()).unwrap();
        assert_eq!(table.n_individuals(), 2);
        assert_eq!(table.n_objectives(), 3);
        assert_eq!(table.individual(0).id, "a");
        assert_eq!(table.row(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let data = "a 1 2\n\nb 3 4\n\n";
        let table = read_table(data.as_bytes()).unwrap();
        assert_eq!(table.n_individuals(), 2);
    }

    #[test]
    fn test_bad_token_reports_line_number() {
        let data = "a 1.0 2.0\nb 3.0 oops\n";
        let err = read_table(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            Error::ParseValue { line: 2, ref token } if token == "oops"
        ));
    }

    #[test]
    fn test_identifier_without_values() {
        let data = "a 1.0 2.0\nlonely\n";
        let err = read_table(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::MissingValues { line: 2 }));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let data = "a 1.0 2.0\nb 3.0 4.0 5.0\n";
        let err = read_table(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::RaggedRow { row: 1, .. }));
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = read_table("".as_bytes()).unwrap_err();
        assert!(matches!(err, Error::EmptyTable));
    }
}
