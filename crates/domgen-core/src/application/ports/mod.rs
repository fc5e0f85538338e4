//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `domgen-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::error::ScaffoldResult;

/// One entry yielded by [`Filesystem::walk`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkEntry {
    pub path: PathBuf,
    pub is_dir: bool,
}

impl WalkEntry {
    pub fn dir(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: true,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_dir: false,
        }
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `domgen_adapters::filesystem::LocalFilesystem` (production)
/// - `domgen_adapters::filesystem::MemoryFilesystem` (testing)
///
/// All operations are synchronous and blocking; there is no internal
/// parallelism and no cancellation. A stuck filesystem call blocks the
/// caller.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Names of the immediate entries of a directory.
    fn read_dir_names(&self, path: &Path) -> ScaffoldResult<Vec<String>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Every entry strictly below `path` (the path itself excluded), in
    /// depth-first lexical order. Any error encountered mid-walk aborts the
    /// whole walk; no partial listing is returned.
    fn walk(&self, path: &Path) -> ScaffoldResult<Vec<WalkEntry>>;

    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> ScaffoldResult<()>;

    /// Create an empty file, truncating it if it already exists.
    fn create_file(&self, path: &Path) -> ScaffoldResult<()>;

    /// Write content to a file.
    fn write_file(&self, path: &Path, content: &str) -> ScaffoldResult<()>;

    /// Read the entire file as text.
    fn read_to_string(&self, path: &Path) -> ScaffoldResult<String>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> ScaffoldResult<()>;
}

/// Port for template rendering.
///
/// Implemented by `domgen_adapters::renderer::TeraEngine`. The exact
/// directive syntax is a property of the engine; the core only requires
/// variable substitution from the data context and distinct errors for
/// parse failures ([`TemplateSyntax`]) versus execution failures
/// ([`TemplateRender`]).
///
/// [`TemplateSyntax`]: crate::error::ScaffoldError::TemplateSyntax
/// [`TemplateRender`]: crate::error::ScaffoldError::TemplateRender
#[cfg_attr(test, mockall::automock)]
pub trait TemplateEngine: Send + Sync {
    /// Parse `source` as a template and execute it against `data`.
    ///
    /// `source_path` identifies the template in error messages.
    fn render(
        &self,
        source_path: &Path,
        source: &str,
        data: &serde_json::Value,
    ) -> ScaffoldResult<String>;
}
