//! Scaffold configuration and path resolution.
//!
//! A [`ScaffoldConfig`] is constructed once by the caller and consumed by a
//! single `generate` call; the core never mutates it. The template data
//! context is an opaque [`serde_json::Value`] passed verbatim to the
//! template engine - the core makes no assumptions about its shape.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// One configured `(input, output)` directory mapping.
///
/// `input` must exist and be a directory when processed; `output` need not
/// exist and is created on demand during rendering. Both are interpreted
/// relative to [`ScaffoldConfig::base`] unless already absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirPair {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl DirPair {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }
}

/// One `(source, destination)` file pair discovered under an input directory.
///
/// Produced transiently by the tree pairer in walk order and consumed
/// immediately by the renderer; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePathPair {
    pub source: PathBuf,
    pub destination: PathBuf,
}

/// Configuration for one scaffold run.
///
/// The order of `dirs` is significant: it determines generation order and,
/// transitively, the order files appear under the target domain directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Base path against which all relative paths are resolved.
    ///
    /// Passed explicitly instead of read from the process working directory
    /// so that path resolution is a pure function and configurations are
    /// testable without process manipulation.
    pub base: PathBuf,
    /// Project directory (relative to `base`) that holds domain directories.
    pub root: PathBuf,
    /// The domain name; used as a directory name and substituted into output
    /// file names. Must be non-empty.
    pub domain: String,
    /// When set, an existing domain directory is removed and regenerated
    /// instead of rejected.
    pub force: bool,
    /// Input/output directory mappings, processed in order.
    pub dirs: Vec<DirPair>,
    /// Opaque template data context, passed verbatim to the engine.
    pub data: serde_json::Value,
}

impl ScaffoldConfig {
    pub fn new(
        base: impl Into<PathBuf>,
        root: impl Into<PathBuf>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            base: base.into(),
            root: root.into(),
            domain: domain.into(),
            force: false,
            dirs: Vec::new(),
            data: serde_json::Value::Null,
        }
    }

    pub fn with_dir(mut self, dir: DirPair) -> Self {
        self.dirs.push(dir);
        self
    }

    pub fn with_dirs(mut self, dirs: impl IntoIterator<Item = DirPair>) -> Self {
        self.dirs.extend(dirs);
        self
    }

    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = data;
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Join a base path with any number of segments.
///
/// Pure function of its arguments; absolute segments replace everything
/// joined so far (standard [`PathBuf::push`] semantics), which lets callers
/// mix absolute and base-relative paths in one configuration.
pub fn resolve_path<I, S>(base: &Path, segments: I) -> PathBuf
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let mut path = base.to_path_buf();
    for segment in segments {
        path.push(segment.as_ref());
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_segments_in_order() {
        let path = resolve_path(Path::new("/work"), ["app", "user"]);
        assert_eq!(path, PathBuf::from("/work/app/user"));
    }

    #[test]
    fn resolve_with_no_segments_is_the_base() {
        let segments: [&str; 0] = [];
        assert_eq!(
            resolve_path(Path::new("/work"), segments),
            PathBuf::from("/work")
        );
    }

    #[test]
    fn absolute_segment_replaces_the_base() {
        let path = resolve_path(Path::new("/work"), ["/elsewhere/templates"]);
        assert_eq!(path, PathBuf::from("/elsewhere/templates"));
    }

    #[test]
    fn config_builder_collects_dirs_in_order() {
        let config = ScaffoldConfig::new("/work", "app", "user")
            .with_dir(DirPair::new("templates/entity", "app/user"))
            .with_dir(DirPair::new("templates/handler", "app/user"));

        assert_eq!(config.dirs.len(), 2);
        assert_eq!(config.dirs[0].input, PathBuf::from("templates/entity"));
        assert_eq!(config.dirs[1].input, PathBuf::from("templates/handler"));
        assert!(!config.force);
    }

    #[test]
    fn config_defaults_to_null_data() {
        let config = ScaffoldConfig::new("/work", "app", "user");
        assert!(config.data.is_null());
    }
}
