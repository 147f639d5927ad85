//! voltaic command-line interface.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use nalgebra::DVector;
use voltaic_core::Circuit;
use voltaic_core::units::format_value;
use voltaic_parser::parse;
use voltaic_solver::{residual_inf_norm, solve_dc};

#[derive(Parser)]
#[command(name = "voltaic")]
#[command(about = "A DC circuit evaluator using modified nodal analysis", long_about = None)]
#[command(version)]
struct Cli {
    /// Input netlist file
    #[arg(value_name = "FILE")]
    input: PathBuf,

    /// Verbose output: circuit statistics and solution residual
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read netlist: {}", cli.input.display()))?;

    let elements = parse(&content).context("cannot parse netlist")?;
    let circuit = Circuit::from_elements(elements).context("cannot build circuit")?;

    if cli.verbose {
        println!("Circuit: {}", cli.input.display());
        println!("Elements: {}", circuit.elements().len());
        println!("Nodes: {}", circuit.num_nodes());
        println!("Voltage sources: {}", circuit.num_branches());
    }

    let mna = circuit.assemble().context("cannot assemble equations")?;
    let solution = solve_dc(&mna).context("cannot solve circuit")?;

    for (name, &v) in circuit.node_names().zip(solution.node_voltages().iter()) {
        println!("V({}) = {}V", name, format_value(v));
    }
    for (name, &i) in circuit.branch_names().zip(solution.branch_currents().iter()) {
        println!("I({}) = {}A", name, format_value(i));
    }

    if cli.verbose {
        let x = DVector::from_iterator(
            mna.size(),
            solution
                .node_voltages()
                .iter()
                .chain(solution.branch_currents().iter())
                .copied(),
        );
        let residual = residual_inf_norm(mna.matrix(), &x, mna.rhs())
            .context("cannot verify solution")?;
        println!("Residual: {:.3e}", residual);
    }

    Ok(())
}
