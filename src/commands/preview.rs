//! Implementation of the `nodesmith preview` command.
//!
//! Prints the rendered node source to stdout without staging files or
//! writing an archive, mirroring what `generate` would place in the
//! package's main source file.

use super::resolve_prompts_text;
use crate::cli::PreviewArgs;
use crate::error::Result;
use crate::package::{PackageRequest, render_node_source};

/// Execute the `nodesmith preview` command.
pub(super) fn cmd_preview(args: PreviewArgs) -> Result<()> {
    let prompts_text = resolve_prompts_text(args.prompts, args.prompts_file)?;
    let request = PackageRequest::parse(&args.name, &args.category, &prompts_text)?;

    let source = render_node_source(&request)?;
    println!("{}", source);

    Ok(())
}
