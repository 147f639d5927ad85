//! Net references: named nodes and the ground sentinel.

use std::fmt;

/// Reserved input name for the reference node.
pub const GROUND_NAME: &str = "GND";

/// A terminal reference in a circuit element.
///
/// Ground is a dedicated variant rather than a magic string, so a misspelled
/// reference name cannot silently become a floating node: it either matches
/// `GND` exactly or names an ordinary node that must appear in the index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Net {
    /// The reference node, fixed at 0 V. Never assigned an equation index.
    Ground,
    /// A named node.
    Node(String),
}

impl Net {
    /// Interpret an input name, mapping the reserved ground name to the
    /// sentinel.
    pub fn parse(name: &str) -> Self {
        if name == GROUND_NAME {
            Net::Ground
        } else {
            Net::Node(name.to_string())
        }
    }

    /// Construct a named (non-ground) net.
    pub fn node(name: impl Into<String>) -> Self {
        Net::Node(name.into())
    }

    /// Check if this is the ground sentinel.
    pub fn is_ground(&self) -> bool {
        matches!(self, Net::Ground)
    }

    /// Get the node name, if this is not ground.
    pub fn name(&self) -> Option<&str> {
        match self {
            Net::Ground => None,
            Net::Node(name) => Some(name),
        }
    }
}

impl fmt::Display for Net {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Net::Ground => write!(f, "{}", GROUND_NAME),
            Net::Node(name) => write!(f, "{}", name),
        }
    }
}
