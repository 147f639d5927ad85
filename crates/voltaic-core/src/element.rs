//! Circuit elements.
//!
//! The element set is closed (three kinds), so elements are a sum type and
//! every consumer matches exhaustively; adding a kind is a compile error at
//! each site that must handle it.

use std::fmt;

use crate::node::Net;

/// The kind of a circuit element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Resistor,
    CurrentSource,
    VoltageSource,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ElementKind::Resistor => "resistor",
            ElementKind::CurrentSource => "current source",
            ElementKind::VoltageSource => "voltage source",
        };
        write!(f, "{}", s)
    }
}

/// One circuit element: a kind, a name, two terminal nets, and a value.
///
/// Terminal order matters for sources: a current source drives conventional
/// current from terminal `a` to terminal `b` through the external circuit,
/// and a voltage source holds `V(a) - V(b)` at its value.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Resistor {
        name: String,
        a: Net,
        b: Net,
        /// Resistance in ohms.
        resistance: f64,
    },
    CurrentSource {
        name: String,
        a: Net,
        b: Net,
        /// DC current in amperes.
        current: f64,
    },
    VoltageSource {
        name: String,
        a: Net,
        b: Net,
        /// DC voltage in volts.
        voltage: f64,
    },
}

impl Element {
    /// Create a resistor.
    pub fn resistor(name: impl Into<String>, a: Net, b: Net, resistance: f64) -> Self {
        Element::Resistor {
            name: name.into(),
            a,
            b,
            resistance,
        }
    }

    /// Create a DC current source.
    pub fn current_source(name: impl Into<String>, a: Net, b: Net, current: f64) -> Self {
        Element::CurrentSource {
            name: name.into(),
            a,
            b,
            current,
        }
    }

    /// Create a DC voltage source.
    pub fn voltage_source(name: impl Into<String>, a: Net, b: Net, voltage: f64) -> Self {
        Element::VoltageSource {
            name: name.into(),
            a,
            b,
            voltage,
        }
    }

    /// Get the element's kind tag.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Resistor { .. } => ElementKind::Resistor,
            Element::CurrentSource { .. } => ElementKind::CurrentSource,
            Element::VoltageSource { .. } => ElementKind::VoltageSource,
        }
    }

    /// Get the element's name.
    pub fn name(&self) -> &str {
        match self {
            Element::Resistor { name, .. }
            | Element::CurrentSource { name, .. }
            | Element::VoltageSource { name, .. } => name,
        }
    }

    /// Get the two terminal nets, in declaration order.
    pub fn terminals(&self) -> (&Net, &Net) {
        match self {
            Element::Resistor { a, b, .. }
            | Element::CurrentSource { a, b, .. }
            | Element::VoltageSource { a, b, .. } => (a, b),
        }
    }

    /// Number of branch-current unknowns this element adds to the system.
    pub fn num_branch_vars(&self) -> usize {
        match self {
            Element::VoltageSource { .. } => 1,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_name() {
        let r = Element::resistor("R1", Net::node("n1"), Net::Ground, 100.0);
        assert_eq!(r.kind(), ElementKind::Resistor);
        assert_eq!(r.name(), "R1");
        assert_eq!(r.num_branch_vars(), 0);
    }

    #[test]
    fn test_voltage_source_adds_branch_var() {
        let v = Element::voltage_source("V1", Net::node("n1"), Net::Ground, 5.0);
        assert_eq!(v.kind(), ElementKind::VoltageSource);
        assert_eq!(v.num_branch_vars(), 1);
    }

    #[test]
    fn test_terminals_in_declaration_order() {
        let i = Element::current_source("I1", Net::node("a"), Net::node("b"), 1.0);
        let (a, b) = i.terminals();
        assert_eq!(a.name(), Some("a"));
        assert_eq!(b.name(), Some("b"));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ElementKind::VoltageSource.to_string(), "voltage source");
    }
}
