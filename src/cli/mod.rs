//! CLI argument parsing for nodesmith.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Nodesmith: generator for self-contained ComfyUI prompt-selector node packages.
///
/// A node package bundles a generated prompt-selector node source file with
/// package boilerplate (`__init__.py`, `LICENSE.md`, `README.md`) into a zip
/// archive ready to drop into a ComfyUI `custom_nodes` directory.
#[derive(Parser, Debug)]
#[command(name = "nodesmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for nodesmith.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a complete node package archive.
    ///
    /// Renders the node source plus boilerplate files, stages them under a
    /// temporary directory, and writes `<sanitized-name>.zip` into the
    /// output directory.
    Generate(GenerateArgs),

    /// Print the rendered node source without packaging.
    ///
    /// Renders the same main source artifact that `generate` would stage,
    /// and writes it to stdout.
    Preview(PreviewArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Display name for the generated node (e.g., "PromptSelector").
    pub name: String,

    /// Category label shown in the ComfyUI node menu.
    #[arg(short, long, default_value = "Custom")]
    pub category: String,

    /// Inline prompt text, one prompt per line.
    #[arg(long, value_name = "TEXT")]
    pub prompts: Option<String>,

    /// File containing prompts, one per line.
    ///
    /// When neither --prompts nor --prompts-file is given, prompts are
    /// read from stdin.
    #[arg(long, value_name = "PATH")]
    pub prompts_file: Option<PathBuf>,

    /// Directory to write the archive into.
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,
}

/// Arguments for the `preview` command.
#[derive(Parser, Debug)]
pub struct PreviewArgs {
    /// Display name for the generated node (e.g., "PromptSelector").
    pub name: String,

    /// Category label shown in the ComfyUI node menu.
    #[arg(short, long, default_value = "Custom")]
    pub category: String,

    /// Inline prompt text, one prompt per line.
    #[arg(long, value_name = "TEXT")]
    pub prompts: Option<String>,

    /// File containing prompts, one per line.
    ///
    /// When neither --prompts nor --prompts-file is given, prompts are
    /// read from stdin.
    #[arg(long, value_name = "PATH")]
    pub prompts_file: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
