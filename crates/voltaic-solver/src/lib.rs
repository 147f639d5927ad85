//! Dense DC solver for voltaic MNA systems.
//!
//! Solves the assembled `G x = b` system by LU factorization, failing fast
//! on singular coefficient matrices, and splits the solution vector into
//! its node-voltage and branch-current halves.

pub mod dc;
pub mod error;
pub mod linear;

pub use dc::{DcSolution, solve_dc};
pub use error::{Error, Result};
pub use linear::{residual_inf_norm, solve_dense};
