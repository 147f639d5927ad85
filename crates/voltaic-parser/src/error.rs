//! Error types for voltaic-parser.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("parse error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("unknown element type at line {line}: {name}")]
    UnknownElement { line: usize, name: String },

    #[error("invalid value at line {line}: {value}")]
    InvalidValue { line: usize, value: String },

    #[error("unsupported source type at line {line}: {source_type} (only dc is supported)")]
    UnsupportedSourceType { line: usize, source_type: String },

    #[error("netlist ended before the .circuit block was closed")]
    Unterminated,

    #[error(".end without a preceding .circuit")]
    NeverStarted,
}

pub type Result<T> = std::result::Result<T, Error>;
