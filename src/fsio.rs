// SPDX-License-Identifier: MIT OR Apache-2.0

//! Filesystem probe seam and the `open_path` action.
//!
//! The resolver takes the probe as a trait object so tests can fake
//! permission failures without touching real OS state.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, error};

use crate::errors::{ResolveError, Result};

/// A direct child of a listed directory.
#[derive(Debug, Clone)]
pub struct DirChild {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Blocking filesystem probes the resolver depends on.
pub trait FileSystemProbe {
    fn exists(&self, path: &Path) -> bool;

    /// Enumerate direct children of `path`, unsorted.
    fn read_dir(&self, path: &Path) -> Result<Vec<DirChild>>;
}

/// Probe backed by the real OS filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystemProbe for OsFileSystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn read_dir(&self, path: &Path) -> Result<Vec<DirChild>> {
        let entries = std::fs::read_dir(path).map_err(|err| classify_io(err, path))?;
        let mut children = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|err| classify_io(err, path))?;
            let child_path = entry.path();
            children.push(DirChild {
                name: entry.file_name().to_string_lossy().into_owned(),
                // Symlinks classify by their target, matching the host's
                // folder/file icons.
                is_dir: child_path.is_dir(),
                path: child_path,
            });
        }
        Ok(children)
    }
}

fn classify_io(err: std::io::Error, path: &Path) -> ResolveError {
    match err.kind() {
        std::io::ErrorKind::PermissionDenied => ResolveError::AccessDenied(path.to_path_buf()),
        std::io::ErrorKind::NotFound => ResolveError::PathNotFound(path.to_path_buf()),
        _ => ResolveError::Io(err),
    }
}

/// Open `path` with the OS default handler.
///
/// Failures are logged and re-signaled to the caller; there is no
/// fallback result to display for a failed action.
pub fn open_path(path: &Path) -> Result<()> {
    debug!(path = %path.display(), "opening path");
    let status = opener_command(path)
        .status()
        .map_err(|err| classify_io(err, path))
        .inspect_err(|err| error!(path = %path.display(), %err, "failed to launch opener"))?;

    if status.success() {
        Ok(())
    } else {
        let err = ResolveError::Io(std::io::Error::other(format!(
            "opener exited with status {status}"
        )));
        error!(path = %path.display(), %err, "open_path failed");
        Err(err)
    }
}

#[cfg(target_os = "macos")]
fn opener_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(target_os = "windows")]
fn opener_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg("start").arg("").arg(path);
    cmd
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn opener_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn read_dir_reports_children_with_kind() {
        let dir = TempDir::new().expect("tempdir");
        std::fs::create_dir(dir.path().join("sub")).expect("mkdir");
        std::fs::write(dir.path().join("note.txt"), "x").expect("write");

        let children = OsFileSystem.read_dir(dir.path()).expect("read_dir");
        assert_eq!(children.len(), 2);
        let sub = children.iter().find(|c| c.name == "sub").expect("sub");
        assert!(sub.is_dir);
        let note = children.iter().find(|c| c.name == "note.txt").expect("note");
        assert!(!note.is_dir);
    }

    #[test]
    fn missing_directory_maps_to_path_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let missing = dir.path().join("nope");
        let err = OsFileSystem.read_dir(&missing).expect_err("missing");
        assert!(matches!(err, ResolveError::PathNotFound(p) if p == missing));
    }
}
