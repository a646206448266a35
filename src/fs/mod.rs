//! Filesystem utilities for nodesmith.
//!
//! Provides the atomic write used for the final archive, so a failed run
//! never leaves a partially written file at the output path.

pub mod atomic;

pub use atomic::atomic_write;
