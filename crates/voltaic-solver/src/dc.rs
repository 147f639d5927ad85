//! DC operating-point analysis.

use nalgebra::DVector;
use voltaic_core::MnaSystem;

use crate::error::Result;
use crate::linear::solve_dense;

/// Result of a DC operating-point solve.
///
/// The solution vector is split positionally: the first `num_nodes` entries
/// are node voltages in equation-index order, the rest are voltage-source
/// branch currents in branch-index order. Ground is not an unknown and
/// reads as 0 V.
#[derive(Debug, Clone, PartialEq)]
pub struct DcSolution {
    node_voltages: DVector<f64>,
    branch_currents: DVector<f64>,
}

impl DcSolution {
    /// Node voltages, indexed by equation index.
    pub fn node_voltages(&self) -> &DVector<f64> {
        &self.node_voltages
    }

    /// Branch currents, indexed by branch index.
    pub fn branch_currents(&self) -> &DVector<f64> {
        &self.branch_currents
    }

    /// Voltage at a node index; `None` is ground and reads 0 V.
    pub fn voltage(&self, index: Option<usize>) -> f64 {
        match index {
            None => 0.0,
            Some(i) => self.node_voltages[i],
        }
    }

    /// Current through the voltage source owning branch index `branch`.
    pub fn current(&self, branch: usize) -> f64 {
        self.branch_currents[branch]
    }
}

/// Solve the DC operating point of an assembled MNA system.
///
/// Pure with respect to the system: solving the same assembled system any
/// number of times yields identical results.
pub fn solve_dc(mna: &MnaSystem) -> Result<DcSolution> {
    let x = solve_dense(mna.matrix(), mna.rhs())?;

    let n = mna.num_nodes();
    let node_voltages = DVector::from_iterator(n, x.iter().take(n).copied());
    let branch_currents =
        DVector::from_iterator(mna.num_branches(), x.iter().skip(n).copied());

    Ok(DcSolution {
        node_voltages,
        branch_currents,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_voltage_divider() {
        // V1 = 10V at node 0, R1 = R2 = 1k: node 1 sits at 5V and 5mA
        // flows around the loop.
        let mut mna = MnaSystem::new(2, 1);
        mna.stamp_voltage_source(Some(0), None, 0, 10.0);
        let g = 1.0 / 1000.0;
        mna.stamp_conductance(Some(0), Some(1), g);
        mna.stamp_conductance(Some(1), None, g);

        let solution = solve_dc(&mna).unwrap();

        assert!((solution.voltage(Some(0)) - 10.0).abs() < 1e-12);
        assert!((solution.voltage(Some(1)) - 5.0).abs() < 1e-12);
        assert_eq!(solution.voltage(None), 0.0);
        // Branch current is negative: the source supplies the loop.
        assert!((solution.current(0) + 0.005).abs() < 1e-12);
    }

    #[test]
    fn test_current_divider() {
        // 10mA into node 0 through two parallel 1k resistors: 5V.
        let mut mna = MnaSystem::new(1, 0);
        mna.stamp_current_source(None, Some(0), 0.010);
        mna.stamp_conductance(Some(0), None, 1.0 / 1000.0);
        mna.stamp_conductance(Some(0), None, 1.0 / 1000.0);

        let solution = solve_dc(&mna).unwrap();
        assert!((solution.voltage(Some(0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_floating_pair_is_singular() {
        // A lone conductance between two non-ground nodes: no reference,
        // the two KCL rows are negatives of each other.
        let mut mna = MnaSystem::new(2, 0);
        mna.stamp_conductance(Some(0), Some(1), 0.5);

        assert_eq!(solve_dc(&mna), Err(Error::SingularMatrix));
    }

    #[test]
    fn test_solve_is_idempotent() {
        let mut mna = MnaSystem::new(1, 1);
        mna.stamp_voltage_source(Some(0), None, 0, 3.3);
        mna.stamp_conductance(Some(0), None, 0.01);

        let first = solve_dc(&mna).unwrap();
        let second = solve_dc(&mna).unwrap();
        assert_eq!(first, second);
    }
}
