//! I/O adapters around the simulation core.

pub mod parser;
pub mod report;
