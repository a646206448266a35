//! Exit code constants for the nodesmith CLI.
//!
//! - 0: Success
//! - 1: User error (bad arguments or failed input validation)
//! - 2: Packaging failure (staging or archive I/O)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, empty name, or empty prompt list.
pub const USER_ERROR: i32 = 1;

/// Packaging failure: staging write, archive write, or template error.
pub const PACKAGING_FAILURE: i32 = 2;
