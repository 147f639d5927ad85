//! Error types for voltaic-solver.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("singular matrix: the system has no unique solution")]
    SingularMatrix,

    #[error("coefficient matrix is not square: {rows}x{cols}")]
    NonSquare { rows: usize, cols: usize },

    #[error("invalid dimensions: matrix has {rows} rows, rhs has {len} entries")]
    DimensionMismatch { rows: usize, len: usize },

    #[error("kernel error: {0}")]
    Kernel(#[from] voltaic_dense::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
