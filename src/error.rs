use thiserror::Error;

/// A single cell failed to normalize.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CellError {
    #[error("invalid currency value: {0:?}")]
    Currency(String),
    #[error("invalid date value: {0:?} (expected MM/DD/YYYY)")]
    Date(String),
}

/// The table as a whole is unusable. All variants are fatal: the dataset
/// loads completely or not at all.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("row {row}, column {column}: {source}")]
    Format {
        row: usize,
        column: usize,
        #[source]
        source: CellError,
    },
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("row {row}, column {column}: expected {expected}, found {found}")]
    CellType {
        row: usize,
        column: usize,
        expected: &'static str,
        found: String,
    },
    #[error("table is empty")]
    Empty,
    #[error("table has a header but no data rows")]
    NoRows,
    #[error("header declares no location columns")]
    NoLocations,
}

/// An interactive selection could not be resolved. Recoverable: the
/// console reports it and repeats the prompt.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SelectionError {
    #[error("expected numbers separated by spaces, got {0:?}")]
    Malformed(String),
    #[error("index {index} is out of range (0..{len})")]
    OutOfRange { index: usize, len: usize },
    #[error("expected exactly two numbers, got {found}")]
    NotAPair { found: usize },
    #[error("start index {start} comes after end index {end}")]
    BackwardsRange { start: usize, end: usize },
}
