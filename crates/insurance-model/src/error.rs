use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Errors raised while building or cleaning a table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CleaningError {
    /// A percentage string was not numeric once the `%` was stripped.
    #[error("column `{column}` row {row}: cannot parse {value:?} as a percentage")]
    Parse {
        column: String,
        row: usize,
        value: String,
        #[source]
        source: ParseFloatError,
    },

    /// A complaint count string did not have the `a/b/c` shape.
    #[error("column `{column}` row {row}: malformed complaint count {value:?}")]
    Format {
        column: String,
        row: usize,
        value: String,
        #[source]
        issue: ComplaintIssue,
    },

    /// A step needed a column the table does not have.
    #[error("missing column `{0}`")]
    MissingColumn(String),

    /// Two columns ended up with the same name.
    #[error("duplicate column name `{0}`")]
    DuplicateColumn(String),

    /// A row did not have one cell per column.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A header list did not have one name per column.
    #[error("got {actual} column names for {expected} columns")]
    HeaderCount { expected: usize, actual: usize },

    /// Conversion to or from a polars data frame failed.
    #[error("data frame conversion error: {0}")]
    Frame(String),
}

/// Why a complaint count string could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComplaintIssue {
    #[error("expected at least two '/'-separated parts")]
    MissingComponent,
    #[error("second part is not an integer: {0}")]
    NotAnInteger(#[from] ParseIntError),
}

impl CleaningError {
    /// Name of the column the error refers to, when there is one.
    pub fn column(&self) -> Option<&str> {
        match self {
            Self::Parse { column, .. } | Self::Format { column, .. } => Some(column),
            Self::MissingColumn(name) | Self::DuplicateColumn(name) => Some(name),
            Self::RowWidth { .. } | Self::HeaderCount { .. } | Self::Frame(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CleaningError>;
