//! Error types for voltaic-dense.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("matrix must have at least 1 row")]
    NoRows,

    #[error("matrix must have at least 1 column")]
    NoColumns,

    #[error("matrix rows must have the same length: row {row} has {found} entries, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix must contain only numeric data: non-finite entry at ({row}, {col})")]
    NotNumeric { row: usize, col: usize },

    #[error("matrices cannot be multiplied: left is {left_rows}x{left_cols}, right has {right_rows} rows")]
    DimensionMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
