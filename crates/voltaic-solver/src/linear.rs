//! Dense linear system solve and verification.

use nalgebra::{DMatrix, DVector};
use voltaic_dense::matrix_multiply;

use crate::error::{Error, Result};

/// Solve `A x = b` by LU factorization.
///
/// Fails with [`Error::SingularMatrix`] before producing any solution if
/// the factorization hits a zero pivot.
pub fn solve_dense(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<DVector<f64>> {
    if a.nrows() != a.ncols() {
        return Err(Error::NonSquare {
            rows: a.nrows(),
            cols: a.ncols(),
        });
    }
    if a.nrows() != b.len() {
        return Err(Error::DimensionMismatch {
            rows: a.nrows(),
            len: b.len(),
        });
    }

    let lu = a.clone().lu();
    if !lu.is_invertible() {
        return Err(Error::SingularMatrix);
    }
    lu.solve(b).ok_or(Error::SingularMatrix)
}

/// Largest absolute residual entry of `A x - b`, computed through the
/// checked row-matrix kernel rather than the factorization that produced
/// `x`, so it independently verifies a solution.
pub fn residual_inf_norm(a: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> Result<f64> {
    if a.nrows() == 0 {
        return Ok(0.0);
    }

    let rows: Vec<Vec<f64>> = a
        .row_iter()
        .map(|row| row.iter().copied().collect())
        .collect();
    let column: Vec<Vec<f64>> = x.iter().map(|&v| vec![v]).collect();

    let product = matrix_multiply(&rows, &column)?;

    Ok(product
        .iter()
        .zip(b.iter())
        .map(|(row, rhs)| (row[0] - rhs).abs())
        .fold(0.0, f64::max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{dmatrix, dvector};

    #[test]
    fn test_solve_simple() {
        // 2x + y = 5, x + 3y = 6 -> x = 1.8, y = 1.4
        let a = dmatrix![2.0, 1.0; 1.0, 3.0];
        let b = dvector![5.0, 6.0];

        let x = solve_dense(&a, &b).unwrap();
        assert!((x[0] - 1.8).abs() < 1e-12);
        assert!((x[1] - 1.4).abs() < 1e-12);
    }

    #[test]
    fn test_singular_matrix() {
        let a = dmatrix![1.0, 2.0; 2.0, 4.0];
        let b = dvector![1.0, 2.0];

        assert_eq!(solve_dense(&a, &b), Err(Error::SingularMatrix));
    }

    #[test]
    fn test_non_square() {
        let a = DMatrix::zeros(2, 3);
        let b = dvector![0.0, 0.0];

        assert_eq!(
            solve_dense(&a, &b),
            Err(Error::NonSquare { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_dimension_mismatch() {
        let a = dmatrix![1.0, 0.0; 0.0, 1.0];
        let b = dvector![1.0, 2.0, 3.0];

        assert_eq!(
            solve_dense(&a, &b),
            Err(Error::DimensionMismatch { rows: 2, len: 3 })
        );
    }

    #[test]
    fn test_residual_of_exact_solution() {
        let a = dmatrix![3.0, 1.0; 1.0, 2.0];
        let b = dvector![9.0, 8.0];

        let x = solve_dense(&a, &b).unwrap();
        let residual = residual_inf_norm(&a, &x, &b).unwrap();
        assert!(residual < 1e-12, "residual = {}", residual);
    }

    #[test]
    fn test_residual_detects_wrong_solution() {
        let a = dmatrix![1.0, 0.0; 0.0, 1.0];
        let b = dvector![1.0, 1.0];
        let wrong = dvector![1.0, 3.0];

        let residual = residual_inf_norm(&a, &wrong, &b).unwrap();
        assert!((residual - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_residual_of_empty_system() {
        let a = DMatrix::zeros(0, 0);
        let v = DVector::zeros(0);
        assert_eq!(residual_inf_norm(&a, &v, &v), Ok(0.0));
    }
}
