//! Package generation pipeline for nodesmith.
//!
//! This module implements the whole generation flow as a single linear
//! transformation with no intermediate waiting states:
//!
//! 1. Validate the request ([`PackageRequest::parse`])
//! 2. Sanitize the name ([`sanitize_name`])
//! 3. Render the four artifacts from built-in templates
//! 4. Stage them under a unique temporary directory
//! 5. Compress the staged tree into a deflate zip
//! 6. Atomically write `<sanitized-name>.zip` to the output directory
//! 7. Drop the staging directory
//!
//! Nothing persists between invocations except the written archive.

mod archive;
mod artifacts;
mod request;
mod sanitize;
mod staging;
mod template;


pub use artifacts::render_node_source;
pub use request::PackageRequest;
pub use sanitize::sanitize_name;

use crate::error::Result;
use crate::fs::atomic_write;
use std::path::{Path, PathBuf};

/// Result of a successful package generation.
#[derive(Debug)]
pub struct GeneratedPackage {
    /// Path of the written archive.
    pub archive_path: PathBuf,

    /// File name of the archive (`<sanitized-name>.zip`).
    pub archive_name: String,

    /// Human-readable confirmation message.
    pub status: String,
}

/// Generate a complete node package archive.
///
/// Renders the four package artifacts, stages them under a unique temporary
/// directory, compresses the staged tree, and writes the archive into
/// `output_dir`.
///
/// The staging directory is removed before this function returns, on both
/// the success and every error path; a failed call leaves no partial output
/// behind.
pub fn generate_package(request: &PackageRequest, output_dir: &Path) -> Result<GeneratedPackage> {
    let sanitized = sanitize_name(request.name());
    let artifacts = artifacts::render_all(request)?;

    // The staging handle removes its tree on drop, which covers the archive
    // failure paths below as well as the success path.
    let staged = staging::stage_artifacts(&sanitized, &artifacts)?;
    let archive_bytes = archive::archive_directory(staged.root())?;
    drop(staged);

    let archive_name = format!("{}.zip", sanitized);
    let archive_path = output_dir.join(&archive_name);
    atomic_write(&archive_path, &archive_bytes)?;

    Ok(GeneratedPackage {
        archive_path,
        status: format!("Complete node package created: {}", archive_name),
        archive_name,
    })
}
