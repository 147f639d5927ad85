//! Dense matrix multiplication with structural validation.
//!
//! Matrices are rows of `Vec`s, the form untrusted callers hand over before
//! anything is promised about their shape. The left operand is validated
//! with an ordered sequence of checks, first failure wins:
//!
//! 1. at least one row
//! 2. at least one column
//! 3. all rows of equal length
//! 4. every entry finite
//!
//! then the inner dimensions of the pair must agree. The right operand's own
//! shape is trusted: only its row count is inspected. Ragged right operands
//! are the caller's bug, not a reported error.

use num_complex::Complex64;

use crate::dot::{dot, dot_complex};
use crate::error::{Error, Result};

/// A real matrix as a list of equal-length rows.
pub type RowMatrix = Vec<Vec<f64>>;

/// A complex matrix as a list of equal-length rows.
pub type ComplexRowMatrix = Vec<Vec<Complex64>>;

/// Run the shape checks shared by the real and complex kernels.
///
/// Returns the common row width.
fn validate_shape<T>(rows: &[Vec<T>]) -> Result<usize> {
    if rows.is_empty() {
        return Err(Error::NoRows);
    }
    let width = rows[0].len();
    if width == 0 {
        return Err(Error::NoColumns);
    }
    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(Error::RaggedRows {
                row: i,
                expected: width,
                found: row.len(),
            });
        }
    }
    Ok(width)
}

/// Multiply two real matrices, validating the left operand.
///
/// `a` must be n×k and `b` k×m; the result is n×m.
pub fn matrix_multiply(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<RowMatrix> {
    let inner = validate_shape(a)?;
    for (i, row) in a.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            if !v.is_finite() {
                return Err(Error::NotNumeric { row: i, col: j });
            }
        }
    }

    if b.len() != inner {
        return Err(Error::DimensionMismatch {
            left_rows: a.len(),
            left_cols: inner,
            right_rows: b.len(),
        });
    }

    // Transpose b so each output entry is a row-by-row dot product.
    let cols = b[0].len();
    let bt: Vec<Vec<f64>> = (0..cols)
        .map(|j| b.iter().map(|row| row[j]).collect())
        .collect();

    Ok(a.iter()
        .map(|row| bt.iter().map(|col| dot(row, col)).collect())
        .collect())
}

/// Multiply two complex matrices, validating the left operand.
pub fn matrix_multiply_complex(
    a: &[Vec<Complex64>],
    b: &[Vec<Complex64>],
) -> Result<ComplexRowMatrix> {
    let inner = validate_shape(a)?;
    for (i, row) in a.iter().enumerate() {
        for (j, v) in row.iter().enumerate() {
            if !v.is_finite() {
                return Err(Error::NotNumeric { row: i, col: j });
            }
        }
    }

    if b.len() != inner {
        return Err(Error::DimensionMismatch {
            left_rows: a.len(),
            left_cols: inner,
            right_rows: b.len(),
        });
    }

    let cols = b[0].len();
    let bt: Vec<Vec<Complex64>> = (0..cols)
        .map(|j| b.iter().map(|row| row[j]).collect())
        .collect();

    Ok(a.iter()
        .map(|row| bt.iter().map(|col| dot_complex(row, col)).collect())
        .collect())
}
