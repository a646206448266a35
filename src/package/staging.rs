//! Staging directory management.
//!
//! Rendered artifacts are written under `<tmp>/<sanitized-name>/` before
//! archiving. The temp directory name carries the sanitized name plus a
//! random suffix so concurrent invocations never collide, and the whole
//! tree is removed when the handle drops. That drop is the cleanup
//! guarantee: staging never survives a failed archive step.

use super::artifacts::RenderedArtifact;
use crate::error::{NodesmithError, Result};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// A staged package tree, removed from disk on drop.
#[derive(Debug)]
pub(super) struct StagedPackage {
    temp_dir: TempDir,
}

impl StagedPackage {
    /// The staging root; its sole entry is the `<sanitized-name>` directory.
    pub(super) fn root(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Write rendered artifacts under a fresh staging directory.
pub(super) fn stage_artifacts(
    sanitized_name: &str,
    artifacts: &[RenderedArtifact],
) -> Result<StagedPackage> {
    let temp_dir = tempfile::Builder::new()
        .prefix(&format!("nodesmith-{}-", sanitized_name))
        .tempdir()
        .map_err(|e| {
            NodesmithError::Packaging(format!("failed to create staging directory: {}", e))
        })?;

    let package_dir = temp_dir.path().join(sanitized_name);
    fs::create_dir(&package_dir).map_err(|e| {
        NodesmithError::Packaging(format!(
            "failed to create package directory '{}': {}",
            package_dir.display(),
            e
        ))
    })?;

    for artifact in artifacts {
        let path = package_dir.join(&artifact.relative_path);
        fs::write(&path, &artifact.content).map_err(|e| {
            NodesmithError::Packaging(format!(
                "failed to write staged file '{}': {}",
                path.display(),
                e
            ))
        })?;
    }

    Ok(StagedPackage { temp_dir })
}
