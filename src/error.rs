//! Error types for the nodesmith CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for nodesmith operations.
///
/// The validation variants (`EmptyName`, `EmptyPromptList`) are recoverable:
/// the user fixes their input and reruns. `Packaging` covers staging and
/// archive I/O failures, surfaced after the staging directory has already
/// been cleaned up.
#[derive(Error, Debug)]
pub enum NodesmithError {
    /// The node name was empty after trimming whitespace.
    #[error("node name cannot be empty")]
    EmptyName,

    /// No usable prompt lines remained after trimming and dropping blanks.
    #[error("at least one prompt is required")]
    EmptyPromptList,

    /// User provided invalid arguments.
    #[error("{0}")]
    UserError(String),

    /// Staging write or archive write failed.
    #[error("packaging failed: {0}")]
    Packaging(String),

    /// A built-in template failed to render.
    ///
    /// Templates ship with the binary, so this indicates a broken template
    /// rather than bad user input.
    #[error("template rendering failed: {0}")]
    Template(String),
}

impl NodesmithError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            NodesmithError::EmptyName
            | NodesmithError::EmptyPromptList
            | NodesmithError::UserError(_) => exit_codes::USER_ERROR,
            NodesmithError::Packaging(_) | NodesmithError::Template(_) => {
                exit_codes::PACKAGING_FAILURE
            }
        }
    }
}

/// Result type alias for nodesmith operations.
pub type Result<T> = std::result::Result<T, NodesmithError>;
