//! Deterministic maze-robot simulator.
//!
//! Simulates a robot walking a 2D grid maze under a fixed direction-priority
//! rule, applying tile effects (redirects, breaker pickups, wall breaking,
//! priority inversion, paired teleporters) until it reaches the goal tile or
//! re-enters a configuration it has already been in (a loop). The
//! architecture enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic simulation logic (movement, tile
//!   effects, loop detection). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting adapters (maze parsing, report rendering).
//!
//! [`solve`] coordinates core logic with I/O to implement the CLI commands.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod solve;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
