//! Project manifest (`domgen.toml`) loading.
//!
//! The manifest describes where generated domains live, which template trees
//! feed each scaffold run, and any extra values templates may reference:
//!
//! ```toml
//! root = "app"
//! inputs = ["templates/entity", "templates/handler"]
//!
//! [data]
//! Author = "Jane Doe"
//! ```
//!
//! The `[data]` table is merged with the derived domain-name variants
//! (`PascalDomainName` and friends) before rendering; manifest keys never
//! override the derived ones.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Default manifest file name, looked up in the current directory.
pub const MANIFEST_FILE: &str = "domgen.toml";

/// Parsed `domgen.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    /// Directory (relative to the manifest) that holds generated domains.
    pub root: PathBuf,

    /// Template trees to scaffold from, processed in order.
    pub inputs: Vec<PathBuf>,

    /// Extra values exposed to every template.
    #[serde(default)]
    pub data: BTreeMap<String, toml::Value>,
}

impl Manifest {
    /// Load and validate a manifest file.
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CliError::ManifestError {
            message: format!("failed to read '{}': {e}", path.display()),
            source: Some(Box::new(e)),
        })?;

        let manifest: Manifest =
            toml::from_str(&content).map_err(|e| CliError::ManifestError {
                message: format!("failed to parse '{}': {e}", path.display()),
                source: Some(Box::new(e)),
            })?;

        manifest.validate(path)?;
        debug!(
            path = %path.display(),
            inputs = manifest.inputs.len(),
            "Manifest loaded"
        );
        Ok(manifest)
    }

    fn validate(&self, path: &Path) -> CliResult<()> {
        if self.root.as_os_str().is_empty() {
            return Err(CliError::ManifestError {
                message: format!("'{}': root must not be empty", path.display()),
                source: None,
            });
        }
        if self.inputs.is_empty() {
            return Err(CliError::ManifestError {
                message: format!("'{}': at least one input is required", path.display()),
                source: None,
            });
        }
        Ok(())
    }

    /// The manifest's `[data]` table as a JSON map, ready to merge into the
    /// template data context.
    pub fn data_as_json(&self) -> CliResult<serde_json::Map<String, serde_json::Value>> {
        let value = serde_json::to_value(&self.data).map_err(|e| CliError::ManifestError {
            message: format!("unrepresentable value in [data]: {e}"),
            source: Some(Box::new(e)),
        })?;
        match value {
            serde_json::Value::Object(map) => Ok(map),
            _ => Ok(serde_json::Map::new()),
        }
    }
}

/// Resolve the manifest location from the `--manifest` flag (or the default
/// file name in the current directory) and the base directory that all
/// manifest-relative paths resolve against.
pub fn resolve_manifest_path(flag: Option<&Path>) -> CliResult<(PathBuf, PathBuf)> {
    let path = flag
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(MANIFEST_FILE));

    let base = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => std::env::current_dir().map_err(|e| CliError::IoError {
            message: "failed to determine the current directory".into(),
            source: e,
        })?,
    };

    Ok((path, base))
}
