//! Implementation of the `nodesmith generate` command.
//!
//! Resolves the prompt input, validates the request, and runs the full
//! packaging pipeline: render, stage, archive, clean up.

use super::resolve_prompts_text;
use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::package::{PackageRequest, generate_package};

/// Execute the `nodesmith generate` command.
pub(super) fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let prompts_text = resolve_prompts_text(args.prompts, args.prompts_file)?;
    let request = PackageRequest::parse(&args.name, &args.category, &prompts_text)?;

    let package = generate_package(&request, &args.output)?;

    println!("{}", package.status);
    println!();
    println!("Archive: {}", package.archive_path.display());
    println!();
    println!("Unzip it into your ComfyUI `custom_nodes` directory and restart ComfyUI.");

    Ok(())
}
