//! Zip archive creation from a staged directory tree.
//!
//! The archive is assembled in memory; the caller decides where the bytes
//! land. Entry paths are relative to the staging root with forward slashes,
//! so the staged `<sanitized-name>` directory becomes the archive's sole
//! top-level entry.

use crate::error::{NodesmithError, Result};
use std::fs;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Compress every file under `root` into an in-memory deflate zip.
///
/// Entries are sorted by path so the archive bytes are deterministic for a
/// given staged tree.
pub(super) fn archive_directory(root: &Path) -> Result<Vec<u8>> {
    let mut files = Vec::new();
    collect_files(root, root, &mut files)?;
    files.sort();

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    // Fixed entry timestamp keeps the archive bytes reproducible.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    for (entry_name, path) in &files {
        writer.start_file(entry_name.clone(), options).map_err(|e| {
            NodesmithError::Packaging(format!(
                "failed to add archive entry '{}': {}",
                entry_name, e
            ))
        })?;

        let content = fs::read(path).map_err(|e| {
            NodesmithError::Packaging(format!(
                "failed to read staged file '{}': {}",
                path.display(),
                e
            ))
        })?;

        writer.write_all(&content).map_err(|e| {
            NodesmithError::Packaging(format!(
                "failed to write archive entry '{}': {}",
                entry_name, e
            ))
        })?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| NodesmithError::Packaging(format!("failed to finish archive: {}", e)))?;

    Ok(cursor.into_inner())
}

/// Recursively collect `(entry_name, path)` pairs for every file under
/// `dir`, with entry names relative to `root` and `/`-separated.
fn collect_files(root: &Path, dir: &Path, files: &mut Vec<(String, PathBuf)>) -> Result<()> {
    let entries = fs::read_dir(dir).map_err(|e| {
        NodesmithError::Packaging(format!(
            "failed to read staging directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    for entry in entries {
        let entry = entry.map_err(|e| {
            NodesmithError::Packaging(format!("failed to read staging entry: {}", e))
        })?;
        let path = entry.path();

        if path.is_dir() {
            collect_files(root, &path, files)?;
        } else {
            files.push((entry_name(root, &path)?, path));
        }
    }

    Ok(())
}

/// Build the `/`-separated archive entry name for a staged file.
fn entry_name(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|e| {
        NodesmithError::Packaging(format!(
            "staged file '{}' escaped the staging root: {}",
            path.display(),
            e
        ))
    })?;

    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();

    Ok(parts.join("/"))
}
