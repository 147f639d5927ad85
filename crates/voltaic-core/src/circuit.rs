//! Circuit: an ordered element list plus derived equation indices.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::element::Element;
use crate::error::{Error, Result};
use crate::mna::MnaSystem;
use crate::node::Net;

/// Resistances at or below this magnitude are rejected rather than turned
/// into an unrepresentable conductance.
const MIN_RESISTANCE: f64 = 1e-200;

/// A circuit ready for assembly: elements in input order, nodes indexed in
/// first-encounter order, voltage-source branches indexed in element order.
///
/// Index assignment is deterministic: both maps are insertion-ordered, so
/// the same element list always yields the same equation layout.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    elements: Vec<Element>,
    nodes: IndexMap<String, usize>,
    branches: IndexMap<String, usize>,
}

impl Circuit {
    /// Build a circuit from a parsed element list, assigning equation
    /// indices in one pass.
    ///
    /// Rejects duplicate element names and zero-valued resistances. A
    /// circuit that never references ground is accepted here; it has no
    /// voltage reference, so its system is singular and the solve fails.
    pub fn from_elements(elements: Vec<Element>) -> Result<Self> {
        let mut nodes = IndexMap::new();
        let mut branches = IndexMap::new();
        let mut names: HashSet<String> = HashSet::new();

        for element in &elements {
            if !names.insert(element.name().to_string()) {
                return Err(Error::DuplicateElement(element.name().to_string()));
            }

            if let Element::Resistor {
                name, resistance, ..
            } = element
            {
                if resistance.abs() <= MIN_RESISTANCE {
                    return Err(Error::ZeroResistance(name.clone()));
                }
            }

            let (a, b) = element.terminals();
            for net in [a, b] {
                if let Net::Node(name) = net {
                    if !nodes.contains_key(name.as_str()) {
                        let index = nodes.len();
                        nodes.insert(name.clone(), index);
                    }
                }
            }

            if element.num_branch_vars() > 0 {
                let index = branches.len();
                branches.insert(element.name().to_string(), index);
            }
        }

        Ok(Self {
            elements,
            nodes,
            branches,
        })
    }

    /// Build a circuit from pre-assigned index maps.
    ///
    /// For callers that carry their own equation numbering. No consistency
    /// checks are run here; an element whose net or branch is missing from
    /// the maps surfaces as an error during [`assemble`](Self::assemble).
    pub fn from_parts(
        elements: Vec<Element>,
        nodes: IndexMap<String, usize>,
        branches: IndexMap<String, usize>,
    ) -> Self {
        Self {
            elements,
            nodes,
            branches,
        }
    }

    /// The elements, in input order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Number of non-ground nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of voltage-source branch unknowns.
    pub fn num_branches(&self) -> usize {
        self.branches.len()
    }

    /// Node names in equation-index order.
    pub fn node_names(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    /// Voltage-source names in branch-index order.
    pub fn branch_names(&self) -> impl Iterator<Item = &str> {
        self.branches.keys().map(String::as_str)
    }

    /// Resolve a net to its equation index; ground resolves to `None`.
    pub fn node_index(&self, net: &Net) -> Result<Option<usize>> {
        match net {
            Net::Ground => Ok(None),
            Net::Node(name) => self
                .nodes
                .get(name.as_str())
                .copied()
                .map(Some)
                .ok_or_else(|| Error::UndefinedNode(name.clone())),
        }
    }

    /// Assemble the MNA system by stamping every element.
    pub fn assemble(&self) -> Result<MnaSystem> {
        let mut mna = MnaSystem::new(self.nodes.len(), self.branches.len());

        for element in &self.elements {
            match element {
                Element::Resistor { a, b, resistance, .. } => {
                    let i = self.node_index(a)?;
                    let j = self.node_index(b)?;
                    mna.stamp_conductance(i, j, 1.0 / resistance);
                }
                Element::CurrentSource { a, b, current, .. } => {
                    let i = self.node_index(a)?;
                    let j = self.node_index(b)?;
                    mna.stamp_current_source(i, j, *current);
                }
                Element::VoltageSource { name, a, b, voltage } => {
                    let i = self.node_index(a)?;
                    let j = self.node_index(b)?;
                    let branch = self
                        .branches
                        .get(name.as_str())
                        .copied()
                        .ok_or_else(|| Error::UndefinedBranch(name.clone()))?;
                    mna.stamp_voltage_source(i, j, branch, *voltage);
                }
            }
        }

        Ok(mna)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn divider() -> Vec<Element> {
        vec![
            Element::voltage_source("V1", Net::node("in"), Net::Ground, 10.0),
            Element::resistor("R1", Net::node("in"), Net::node("out"), 1000.0),
            Element::resistor("R2", Net::node("out"), Net::Ground, 1000.0),
        ]
    }

    #[test]
    fn test_index_assignment_first_encounter_order() {
        let circuit = Circuit::from_elements(divider()).unwrap();

        let names: Vec<&str> = circuit.node_names().collect();
        assert_eq!(names, vec!["in", "out"]);
        assert_eq!(circuit.num_nodes(), 2);
        assert_eq!(circuit.num_branches(), 1);
        assert_eq!(circuit.node_index(&Net::node("in")).unwrap(), Some(0));
        assert_eq!(circuit.node_index(&Net::node("out")).unwrap(), Some(1));
        assert_eq!(circuit.node_index(&Net::Ground).unwrap(), None);
    }

    #[test]
    fn test_branch_indices_follow_element_order() {
        let elements = vec![
            Element::voltage_source("Vb", Net::node("n2"), Net::Ground, 1.0),
            Element::resistor("R1", Net::node("n1"), Net::node("n2"), 10.0),
            Element::voltage_source("Va", Net::node("n1"), Net::Ground, 2.0),
        ];
        let circuit = Circuit::from_elements(elements).unwrap();

        let branches: Vec<&str> = circuit.branch_names().collect();
        assert_eq!(branches, vec!["Vb", "Va"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let elements = vec![
            Element::resistor("R1", Net::node("n1"), Net::Ground, 1.0),
            Element::resistor("R1", Net::node("n2"), Net::Ground, 2.0),
        ];
        assert_eq!(
            Circuit::from_elements(elements).unwrap_err(),
            Error::DuplicateElement("R1".to_string())
        );
    }

    #[test]
    fn test_zero_resistance_rejected() {
        let elements = vec![Element::resistor("R1", Net::node("n1"), Net::Ground, 0.0)];
        assert_eq!(
            Circuit::from_elements(elements).unwrap_err(),
            Error::ZeroResistance("R1".to_string())
        );
    }

    #[test]
    fn test_groundless_circuit_assembles_with_dependent_rows() {
        // No ground reference: each KCL row of the pair sums to zero, so
        // the rows are negatives of each other. Assembly succeeds; the
        // missing reference is the solver's singularity to report.
        let elements = vec![Element::resistor("R1", Net::node("x"), Net::node("y"), 100.0)];
        let circuit = Circuit::from_elements(elements).unwrap();
        let mna = circuit.assemble().unwrap();

        let m = mna.matrix();
        assert_eq!(m[(0, 0)], -m[(0, 1)]);
        assert_eq!(m[(1, 1)], -m[(1, 0)]);
    }

    #[test]
    fn test_empty_circuit_is_allowed() {
        let circuit = Circuit::from_elements(Vec::new()).unwrap();
        assert_eq!(circuit.num_nodes(), 0);
        assert_eq!(circuit.assemble().unwrap().size(), 0);
    }

    #[test]
    fn test_assemble_divider() {
        let circuit = Circuit::from_elements(divider()).unwrap();
        let mna = circuit.assemble().unwrap();

        assert_eq!(mna.size(), 3);
        let g = 1.0 / 1000.0;
        assert!((mna.matrix()[(0, 0)] - g).abs() < 1e-15);
        assert!((mna.matrix()[(1, 1)] - 2.0 * g).abs() < 1e-15);
        assert!((mna.matrix()[(0, 1)] + g).abs() < 1e-15);
        // Voltage source row.
        assert_eq!(mna.matrix()[(2, 0)], 1.0);
        assert_eq!(mna.rhs()[2], 10.0);
    }

    #[test]
    fn test_unindexed_node_surfaces_during_assembly() {
        // A hand-built index map that is missing a referenced node.
        let elements = vec![Element::resistor("R1", Net::node("n1"), Net::node("n2"), 1.0)];
        let mut nodes = IndexMap::new();
        nodes.insert("n1".to_string(), 0);

        let circuit = Circuit::from_parts(elements, nodes, IndexMap::new());
        assert_eq!(
            circuit.assemble().unwrap_err(),
            Error::UndefinedNode("n2".to_string())
        );
    }

    #[test]
    fn test_missing_branch_surfaces_during_assembly() {
        let elements = vec![Element::voltage_source(
            "V1",
            Net::node("n1"),
            Net::Ground,
            5.0,
        )];
        let mut nodes = IndexMap::new();
        nodes.insert("n1".to_string(), 0);

        let circuit = Circuit::from_parts(elements, nodes, IndexMap::new());
        assert_eq!(
            circuit.assemble().unwrap_err(),
            Error::UndefinedBranch("V1".to_string())
        );
    }
}
