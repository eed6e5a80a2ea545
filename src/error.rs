#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the objective table has no rows.
    #[error("malformed input: objective table is empty")]
    EmptyTable,

    /// Returned when a row's objective count disagrees with the first row's.
    #[error("malformed input: row {row} has {got} objective values, expected {expected}")]
    RaggedRow {
        /// The 0-based index of the offending row.
        row: usize,
        /// The objective count established by the first row.
        expected: usize,
        /// The objective count actually found.
        got: usize,
    },

    /// Returned when the table has fewer than 2 objective columns.
    ///
    /// Aggregation is meaningless for a single objective.
    #[error("malformed input: need at least 2 objectives, got {got}")]
    TooFewObjectives {
        /// The objective count actually found.
        got: usize,
    },

    /// Returned when the table has fewer than 2 individuals.
    ///
    /// The delta error is defined over pairs of individuals; zero pairs is
    /// an input-validation failure, not a zero-error success.
    #[error("malformed input: need at least 2 individuals, got {got}")]
    TooFewIndividuals {
        /// The individual count actually found.
        got: usize,
    },

    /// Returned when the requested group count is outside `[1, m]`.
    #[error("invalid group count: k ({k}) must be in [1, {m}]")]
    InvalidGroupCount {
        /// The requested number of aggregated objectives.
        k: usize,
        /// The number of original objectives.
        m: usize,
    },

    /// Returned when an aggregated table's row count disagrees with the
    /// objective table it is scored against.
    #[error("row count mismatch: aggregated table has {got} rows, expected {expected}")]
    RowCountMismatch {
        /// The row count of the objective table.
        expected: usize,
        /// The row count of the aggregated table.
        got: usize,
    },

    /// Returned when the individual file cannot be read.
    #[error("i/o error: {0}")]
    Io(String),

    /// Returned when a field in the individual file is not a number.
    #[error("parse error at line {line}: '{token}' is not a valid objective value")]
    ParseValue {
        /// The 1-based line number in the input file.
        line: usize,
        /// The offending token.
        token: String,
    },

    /// Returned when a line in the individual file carries an identifier
    /// but no objective values.
    #[error("parse error at line {line}: identifier without objective values")]
    MissingValues {
        /// The 1-based line number in the input file.
        line: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
