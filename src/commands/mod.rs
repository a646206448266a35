//! Command implementations for nodesmith.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the prompt-input resolution shared by both
//! commands.

mod generate;
mod preview;

use crate::cli::Command;
use crate::error::{NodesmithError, Result};
use std::io::Read;
use std::path::PathBuf;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Preview(args) => preview::cmd_preview(args),
    }
}

/// Resolve the raw prompts text from the CLI prompt flags.
///
/// Exactly one source is used: inline `--prompts` text, a `--prompts-file`,
/// or stdin when neither flag is given. Supplying both flags is an error.
fn resolve_prompts_text(prompts: Option<String>, prompts_file: Option<PathBuf>) -> Result<String> {
    match (prompts, prompts_file) {
        (Some(_), Some(_)) => Err(NodesmithError::UserError(
            "use either --prompts or --prompts-file, not both".to_string(),
        )),
        (Some(text), None) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(&path).map_err(|e| {
            NodesmithError::UserError(format!(
                "failed to read prompts file '{}': {}",
                path.display(),
                e
            ))
        }),
        (None, None) => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text).map_err(|e| {
                NodesmithError::UserError(format!("failed to read prompts from stdin: {}", e))
            })?;
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use tempfile::TempDir;

    #[test]
    fn inline_prompts_are_returned_verbatim() {
        let text = resolve_prompts_text(Some("a\nb\nc".to_string()), None).unwrap();
        assert_eq!(text, "a\nb\nc");
    }

    #[test]
    fn prompts_file_is_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prompts.txt");
        std::fs::write(&path, "first prompt\nsecond prompt\n").unwrap();

        let text = resolve_prompts_text(None, Some(path)).unwrap();
        assert_eq!(text, "first prompt\nsecond prompt\n");
    }

    #[test]
    fn missing_prompts_file_is_a_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("does-not-exist.txt");

        let result = resolve_prompts_text(None, Some(path));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn both_prompt_sources_are_rejected() {
        let result = resolve_prompts_text(
            Some("inline".to_string()),
            Some(PathBuf::from("prompts.txt")),
        );
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("not both"));
    }
}
