//! The Modified Nodal Analysis matrix system.

use nalgebra::{DMatrix, DVector};

/// The linear system `G x = b` produced by circuit assembly.
///
/// Unknowns are ordered node voltages first, branch currents after: row and
/// column `k < num_nodes` belong to the KCL equation of node `k`, and row
/// `num_nodes + v` is both the branch-current unknown and the defining
/// equation of voltage source `v`. Ground has no row or column; stamps take
/// `Option<usize>` terminals where `None` means ground.
#[derive(Debug, Clone, PartialEq)]
pub struct MnaSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
    num_nodes: usize,
    num_branches: usize,
}

impl MnaSystem {
    /// Create a zeroed system for `num_nodes` non-ground nodes and
    /// `num_branches` voltage-source branch unknowns.
    pub fn new(num_nodes: usize, num_branches: usize) -> Self {
        let size = num_nodes + num_branches;
        Self {
            matrix: DMatrix::zeros(size, size),
            rhs: DVector::zeros(size),
            num_nodes,
            num_branches,
        }
    }

    /// Total number of equations (nodes + branches).
    pub fn size(&self) -> usize {
        self.num_nodes + self.num_branches
    }

    /// Number of non-ground node equations.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of branch-current unknowns.
    pub fn num_branches(&self) -> usize {
        self.num_branches
    }

    /// Stamp a conductance `g` between nodes `i` and `j`.
    ///
    /// Adds `+g` on each present terminal's diagonal and `-g` on the cross
    /// terms when both terminals are present; a grounded side contributes
    /// only the other side's diagonal.
    pub fn stamp_conductance(&mut self, i: Option<usize>, j: Option<usize>, g: f64) {
        if let Some(i) = i {
            self.matrix[(i, i)] += g;
        }
        if let Some(j) = j {
            self.matrix[(j, j)] += g;
        }
        if let (Some(i), Some(j)) = (i, j) {
            self.matrix[(i, j)] -= g;
            self.matrix[(j, i)] -= g;
        }
    }

    /// Stamp a DC current source driving `current` amperes from node `i` to
    /// node `j` through the external circuit: the constant term loses
    /// `current` at `i` and gains it at `j`. Grounded terminals are skipped.
    pub fn stamp_current_source(&mut self, i: Option<usize>, j: Option<usize>, current: f64) {
        if let Some(i) = i {
            self.rhs[i] -= current;
        }
        if let Some(j) = j {
            self.rhs[j] += current;
        }
    }

    /// Stamp a DC voltage source holding `V(i) - V(j) = voltage`, with its
    /// branch current as unknown `branch`.
    ///
    /// The branch unknown enters node `i`'s KCL row with `+1` and node `j`'s
    /// with `-1`; the defining row carries the matching `±1` voltage
    /// coefficients and the source value on the right-hand side.
    pub fn stamp_voltage_source(
        &mut self,
        i: Option<usize>,
        j: Option<usize>,
        branch: usize,
        voltage: f64,
    ) {
        let row = self.num_nodes + branch;

        if let Some(i) = i {
            self.matrix[(i, row)] += 1.0;
            self.matrix[(row, i)] += 1.0;
        }
        if let Some(j) = j {
            self.matrix[(j, row)] -= 1.0;
            self.matrix[(row, j)] -= 1.0;
        }

        self.rhs[row] = voltage;
    }

    /// The coefficient matrix `G`.
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// The right-hand side `b`.
    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    /// The augmented `[G | b]` matrix: `size()` rows, `size() + 1` columns,
    /// constant term in the last column.
    pub fn augmented(&self) -> DMatrix<f64> {
        let n = self.size();
        DMatrix::from_fn(n, n + 1, |r, c| {
            if c == n {
                self.rhs[r]
            } else {
                self.matrix[(r, c)]
            }
        })
    }
}
