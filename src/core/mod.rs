//! Deterministic, pure simulation logic.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests.

pub mod detector;
pub mod direction;
pub mod driver;
pub mod grid;
pub mod state;
