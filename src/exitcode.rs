//! Process exit codes

/// Successful termination
pub const OK: i32 = 0;

/// Any command failure: bad flags or a failed operation
pub const FAILURE: i32 = 1;
