//! Netlist parser for voltaic.
//!
//! Turns `.circuit` / `.end` netlist text into the ordered element list the
//! circuit model consumes. Parsing is strict: unknown element kinds,
//! malformed lines, non-numeric values, and non-DC source types are errors,
//! not warnings.

pub mod error;
pub mod parser;

pub use error::{Error, Result};
pub use parser::parse;
