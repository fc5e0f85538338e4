//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the entire scaffolding workflow:
//! 1. Guard against an already-existing domain directory
//! 2. For each configured directory pair: pair template files with output
//!    paths, then render each pair
//!
//! The sequence is linear and fail-fast: the first error stops everything,
//! and whatever was written before the failure remains on disk. There is no
//! rollback and no dry-run here. The existence check and the subsequent
//! writes are not atomic as a unit; concurrent `generate` calls against the
//! same root/domain must be serialized by the caller.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateEngine},
    domain::{FilePathPair, NamingRule, ScaffoldConfig, resolve_path},
    error::{ScaffoldError, ScaffoldResult},
};

/// Recursive directory listing produced by [`ScaffoldService::inspect`].
///
/// Base names only, in walk order. Used for verification, not by the
/// generation path itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeListing {
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

/// Main scaffolding service.
///
/// Owns the filesystem and template-engine adapters and orchestrates the
/// guard → pair → render workflow.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
    engine: Box<dyn TemplateEngine>,
    naming: NamingRule,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters and the
    /// default naming rule (`domain` token, `.tmpl` templates rendered to
    /// `.go`).
    pub fn new(filesystem: Box<dyn Filesystem>, engine: Box<dyn TemplateEngine>) -> Self {
        Self {
            filesystem,
            engine,
            naming: NamingRule::default(),
        }
    }

    /// Override the naming rule.
    pub fn with_naming(mut self, naming: NamingRule) -> Self {
        self.naming = naming;
        self
    }

    /// Scaffold a new domain.
    ///
    /// This is the main use case. With `force` unset, an existing domain
    /// directory aborts the run with [`ScaffoldError::DomainExists`]. With
    /// `force` set, the existing domain directory is removed first and
    /// regenerated from scratch (never merged into).
    #[instrument(
        skip_all,
        fields(domain = %config.domain, root = %config.root.display())
    )]
    pub fn generate(&self, config: &ScaffoldConfig) -> ScaffoldResult<()> {
        info!(dirs = config.dirs.len(), "Scaffolding domain");

        match self.check_domain(config) {
            Ok(_) => {}
            Err(ScaffoldError::DomainExists { path }) if config.force => {
                warn!(path = %path.display(), "Domain exists, removing (--force)");
                self.filesystem.remove_dir_all(&path)?;
            }
            Err(e) => return Err(e),
        }

        for dir in &config.dirs {
            let input = resolve_path(&config.base, [&dir.input]);
            let output = resolve_path(&config.base, [&dir.output]);

            let pairs = self.pair_files(&config.domain, &input, &output)?;
            debug!(
                input = %input.display(),
                files = pairs.len(),
                "Paired template directory"
            );

            for pair in &pairs {
                self.render_pair(&config.data, pair)?;
            }
        }

        info!("Scaffold completed successfully");
        Ok(())
    }

    /// Existence guard: resolve the domain directory and reject the run if
    /// it already exists under the root.
    ///
    /// Read-only and advisory: no lock is held between this check and the
    /// subsequent writes. A missing root is fine - the domain cannot exist
    /// yet and the root is created on demand during rendering.
    pub fn check_domain(&self, config: &ScaffoldConfig) -> ScaffoldResult<PathBuf> {
        let root = resolve_path(&config.base, [&config.root]);
        let domain_path = root.join(&config.domain);

        if !self.filesystem.exists(&root) {
            return Ok(domain_path);
        }

        let names = self.filesystem.read_dir_names(&root)?;
        if names.iter().any(|name| name == &config.domain) {
            return Err(ScaffoldError::DomainExists { path: domain_path });
        }

        Ok(domain_path)
    }

    /// Tree pairer: compute one `(source, destination)` pair per regular
    /// file under `input`, in walk order.
    ///
    /// Directories themselves produce no pair; they are recreated later via
    /// directory creation. Destinations are namespaced under the input
    /// directory's own base name, so a template tree named `entity` always
    /// lands under an `entity` subfolder of `output`.
    #[instrument(skip(self), fields(input = %input.display()))]
    pub fn pair_files(
        &self,
        domain: &str,
        input: &Path,
        output: &Path,
    ) -> ScaffoldResult<Vec<FilePathPair>> {
        if !self.filesystem.exists(input) {
            return Err(ScaffoldError::InputNotFound { path: input.into() });
        }
        if !self.filesystem.is_dir(input) {
            return Err(ScaffoldError::NotADirectory { path: input.into() });
        }

        let namespace = input.file_name().map(PathBuf::from).unwrap_or_default();

        let mut pairs = Vec::new();
        for entry in self.filesystem.walk(input)? {
            if entry.is_dir {
                continue;
            }

            let rel = entry.path.strip_prefix(input).map_err(|_| ScaffoldError::Io {
                path: entry.path.clone(),
                op: "relativize against the input directory",
                reason: "walk yielded a path outside the walked tree".into(),
            })?;
            let rel_parent = rel.parent().unwrap_or_else(|| Path::new(""));
            let file_name = rel
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .ok_or_else(|| ScaffoldError::Io {
                    path: entry.path.clone(),
                    op: "extract file name",
                    reason: "walk yielded a path without a final component".into(),
                })?;

            let out_name = self.naming.output_name(domain, &file_name);
            let destination = output.join(&namespace).join(rel_parent).join(out_name);

            pairs.push(FilePathPair {
                source: entry.path,
                destination,
            });
        }

        Ok(pairs)
    }

    /// Template renderer: materialize one file pair on disk.
    ///
    /// Creates the destination's parent chain, creates (or truncates) the
    /// destination file, then reads, parses, and executes the source against
    /// the data context. On failure the already-created destination file is
    /// left on disk; callers must treat the whole run as non-atomic.
    pub fn render_pair(
        &self,
        data: &serde_json::Value,
        pair: &FilePathPair,
    ) -> ScaffoldResult<()> {
        if let Some(parent) = pair.destination.parent() {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.create_file(&pair.destination)?;

        let source = self.filesystem.read_to_string(&pair.source)?;
        let rendered = self.engine.render(&pair.source, &source, data)?;
        self.filesystem.write_file(&pair.destination, &rendered)?;

        debug!(destination = %pair.destination.display(), "Rendered file");
        Ok(())
    }

    /// Tree inspector: list every directory and file base name beneath
    /// `path` (excluding the path itself), in walk order.
    pub fn inspect(&self, path: &Path) -> ScaffoldResult<TreeListing> {
        let mut listing = TreeListing::default();
        for entry in self.filesystem.walk(path)? {
            let name = entry
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if entry.is_dir {
                listing.dirs.push(name);
            } else {
                listing.files.push(name);
            }
        }
        Ok(listing)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
