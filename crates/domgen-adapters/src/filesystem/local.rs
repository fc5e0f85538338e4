//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use domgen_core::{
    application::ports::{Filesystem, WalkEntry},
    error::{ScaffoldError, ScaffoldResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn read_dir_names(&self, path: &Path) -> ScaffoldResult<Vec<String>> {
        let entries = std::fs::read_dir(path).map_err(|e| map_io_error(path, "read directory", e))?;
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| map_io_error(path, "read directory entry", e))?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn walk(&self, path: &Path) -> ScaffoldResult<Vec<WalkEntry>> {
        // sort_by_file_name pins the depth-first lexical order the pairing
        // contract depends on; the OS readdir order is arbitrary.
        let mut entries = Vec::new();
        for result in WalkDir::new(path).min_depth(1).sort_by_file_name() {
            let entry = result.map_err(|e| {
                let at = e
                    .path()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| path.to_path_buf());
                ScaffoldError::Io {
                    path: at,
                    op: "walk directory",
                    reason: e.to_string(),
                }
            })?;
            entries.push(WalkEntry {
                path: entry.path().to_path_buf(),
                is_dir: entry.file_type().is_dir(),
            });
        }
        debug!(path = %path.display(), entries = entries.len(), "Walked directory");
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, "create directory", e))
    }

    fn create_file(&self, path: &Path) -> ScaffoldResult<()> {
        // The handle is dropped here; content arrives via write_file once
        // rendering succeeds.
        std::fs::File::create(path)
            .map(drop)
            .map_err(|e| map_io_error(path, "create file", e))
    }

    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, "write file", e))
    }

    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String> {
        std::fs::read_to_string(path).map_err(|e| map_io_error(path, "read file", e))
    }

    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, "remove directory", e))
    }
}

fn map_io_error(path: &Path, op: &'static str, e: io::Error) -> ScaffoldError {
    ScaffoldError::Io {
        path: path.to_path_buf(),
        op,
        reason: e.to_string(),
    }
}
