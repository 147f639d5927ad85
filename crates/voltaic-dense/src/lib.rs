//! Checked dense row-matrix kernels for voltaic.
//!
//! Provides the lowest numeric layer of the workspace:
//! - f64 and Complex64 row dot products
//! - dense matrix multiplication over `Vec<Vec<_>>` rows, with explicit
//!   structural validation of the left operand
//!
//! The circuit-assembly path produces well-formed matrices by construction
//! and solves through nalgebra; these kernels are the contract for matrices
//! that arrive from outside that path, and back the solver's residual
//! verification.

pub mod dot;
pub mod error;
pub mod matmul;

pub use dot::{dot, dot_complex};
pub use error::{Error, Result};
pub use matmul::{ComplexRowMatrix, RowMatrix, matrix_multiply, matrix_multiply_complex};
