//! Error types for voltaic-core.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("undefined node: {0}")]
    UndefinedNode(String),

    #[error("voltage source has no branch index: {0}")]
    UndefinedBranch(String),

    #[error("duplicate element name: {0}")]
    DuplicateElement(String),

    #[error("zero-valued resistance: {0}")]
    ZeroResistance(String),
}

pub type Result<T> = std::result::Result<T, Error>;
