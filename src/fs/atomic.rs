//! Atomic file writes.
//!
//! The archive is assembled in memory and written with temp-file-plus-rename
//! so an interrupted or failed run never leaves a partial file at the target
//! path.
//!
//! The temporary file is created in the same directory as the target
//! (named `.{filename}.tmp`), so the rename stays on one filesystem where
//! POSIX guarantees it is atomic. On Windows, renaming over an existing file
//! fails; the write retries once after removing the stale target.

use crate::error::{NodesmithError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write bytes to a file.
///
/// Writes the content to a temporary sibling file, syncs it to disk, and
/// renames it over the target. The target's parent directory is created if
/// it does not exist.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            NodesmithError::Packaging(format!(
                "failed to create output directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_sibling(path)?;
    write_and_sync(&temp_path, content)?;
    replace_file(&temp_path, path)
}

/// Build the temporary sibling path for a target file.
fn temp_sibling(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let file_name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            NodesmithError::Packaging(format!("invalid output path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", file_name)))
}

/// Write content to a file and sync it to disk.
fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        NodesmithError::Packaging(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            NodesmithError::Packaging(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}

/// Rename the temporary file over the target.
fn replace_file(temp_path: &Path, target: &Path) -> Result<()> {
    if let Err(err) = fs::rename(temp_path, target) {
        // Windows cannot rename over an existing file. Retry once after
        // removing the stale target; POSIX never takes this path.
        let retried = target.exists()
            && fs::remove_file(target).is_ok()
            && fs::rename(temp_path, target).is_ok();

        if !retried {
            let _ = fs::remove_file(temp_path);
            return Err(NodesmithError::Packaging(format!(
                "failed to replace '{}': {}",
                target.display(),
                err
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.zip");

        atomic_write(&file_path, b"archive bytes").unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), b"archive bytes");
    }

    #[test]
    fn replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.zip");
        fs::write(&file_path, "original").unwrap();

        atomic_write(&file_path, b"replacement").unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), b"replacement");
    }

    #[test]
    fn creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("nested").join("dir").join("out.zip");

        atomic_write(&file_path, b"content").unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), b"content");
    }

    #[test]
    fn leaves_no_temporary_file_behind() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("out.zip");

        atomic_write(&file_path, b"content").unwrap();

        assert!(!temp_dir.path().join(".out.zip.tmp").exists());
    }

    #[test]
    fn handles_binary_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.bin");
        let content: Vec<u8> = (0..=255).collect();

        atomic_write(&file_path, &content).unwrap();

        assert_eq!(fs::read(&file_path).unwrap(), content);
    }

    #[test]
    fn handles_empty_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.zip");

        atomic_write(&file_path, b"").unwrap();

        assert!(fs::read(&file_path).unwrap().is_empty());
    }

    #[test]
    fn temp_sibling_stays_in_parent_directory() {
        let temp = temp_sibling(Path::new("/some/dir/file.zip")).unwrap();
        assert_eq!(temp, PathBuf::from("/some/dir/.file.zip.tmp"));
    }
}
