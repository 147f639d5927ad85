//! # voltaic
//!
//! A DC circuit evaluator built on Modified Nodal Analysis (MNA).
//!
//! voltaic parses a small netlist of resistors, DC voltage sources, and DC
//! current sources, assembles the MNA system `G x = b`, and solves for the
//! voltage at every node and the current through every voltage source.
//!
//! ## Quick start
//!
//! ```rust
//! let netlist = "\
//! .circuit
//! V1 in GND dc 10
//! R1 in out 1k
//! R2 out GND 1k
//! .end
//! ";
//!
//! let op = voltaic::evaluate(netlist).unwrap();
//! assert!((op.voltage("out").unwrap() - 5.0).abs() < 1e-9);
//! ```
//!
//! The workspace splits into layers, re-exported here:
//! - [`core`]: nets, elements, circuit, MNA assembly
//! - [`parser`]: netlist text to element list
//! - [`solver`]: dense LU solve and the DC solution split
//! - [`dense`]: checked row-matrix kernels

pub use voltaic_core as core;
pub use voltaic_dense as dense;
pub use voltaic_parser as parser;
pub use voltaic_solver as solver;

use indexmap::IndexMap;
use thiserror::Error;

pub use voltaic_core::{Circuit, Element, ElementKind, GROUND_NAME, MnaSystem, Net};
pub use voltaic_parser::parse;
pub use voltaic_solver::{DcSolution, solve_dc};

/// Re-exports of nalgebra's dynamic matrix and vector types.
pub use nalgebra::{DMatrix, DVector};

/// Any failure on the way from netlist text to a solved operating point.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] voltaic_parser::Error),

    #[error(transparent)]
    Circuit(#[from] voltaic_core::Error),

    #[error(transparent)]
    Solve(#[from] voltaic_solver::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A solved operating point: name-keyed node voltages and voltage-source
/// branch currents, each in equation-index order.
#[derive(Debug, Clone, PartialEq)]
pub struct OperatingPoint {
    voltages: IndexMap<String, f64>,
    currents: IndexMap<String, f64>,
}

impl OperatingPoint {
    /// Node voltages by name, ground excluded.
    pub fn voltages(&self) -> &IndexMap<String, f64> {
        &self.voltages
    }

    /// Voltage-source branch currents by source name.
    pub fn currents(&self) -> &IndexMap<String, f64> {
        &self.currents
    }

    /// Voltage at a named node. Ground reads 0 V; an unknown name reads
    /// `None`.
    pub fn voltage(&self, node: &str) -> Option<f64> {
        if node == GROUND_NAME {
            Some(0.0)
        } else {
            self.voltages.get(node).copied()
        }
    }

    /// Branch current through a named voltage source.
    pub fn current(&self, source: &str) -> Option<f64> {
        self.currents.get(source).copied()
    }
}

/// Assemble and solve a circuit, keying the solution by node and source
/// names.
pub fn solve_circuit(circuit: &Circuit) -> Result<OperatingPoint> {
    let mna = circuit.assemble()?;
    let solution = solve_dc(&mna)?;

    let voltages = circuit
        .node_names()
        .zip(solution.node_voltages().iter())
        .map(|(name, &v)| (name.to_string(), v))
        .collect();
    let currents = circuit
        .branch_names()
        .zip(solution.branch_currents().iter())
        .map(|(name, &i)| (name.to_string(), i))
        .collect();

    Ok(OperatingPoint { voltages, currents })
}

/// Evaluate netlist text end to end: parse, index, assemble, solve.
pub fn evaluate(netlist: &str) -> Result<OperatingPoint> {
    let elements = parse(netlist)?;
    let circuit = Circuit::from_elements(elements)?;
    solve_circuit(&circuit)
}

/// Prelude with the commonly used types.
pub mod prelude {
    pub use crate::{
        Circuit, DcSolution, Element, ElementKind, MnaSystem, Net, OperatingPoint, evaluate,
        parse, solve_circuit, solve_dc,
    };
}
