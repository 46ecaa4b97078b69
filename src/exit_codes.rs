//! Stable exit codes for blunder CLI commands.

/// Command succeeded; `solve` reached the goal.
pub const OK: i32 = 0;
/// Malformed maze, invalid arguments, or an internal simulation error.
pub const INVALID: i32 = 1;
/// `solve` confirmed the robot loops forever.
pub const LOOP: i32 = 2;
