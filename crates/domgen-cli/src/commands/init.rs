//! `domgen init` — write a starter manifest and template tree.

use std::path::Path;

use tracing::info;

use crate::{
    cli::{InitArgs, global::GlobalArgs},
    error::{CliError, CliResult},
    manifest::{Manifest, resolve_manifest_path},
    output::OutputManager,
};

/// Starter template dropped next to the manifest so `domgen new` works
/// immediately after `domgen init`.
const SAMPLE_TEMPLATE_PATH: &str = "templates/entity/domain_entity.tmpl";
const SAMPLE_TEMPLATE: &str = "package {{ LowerDomainName }}

// {{ PascalDomainName }} is the core entity of the {{ LowerDomainName }} domain.
type {{ PascalDomainName }} struct {
\tID string
}
";

/// Create a starter manifest and a minimal template tree.
pub fn execute(args: InitArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    output.info("Initialising manifest...")?;

    let (manifest_path, base) = resolve_manifest_path(global.manifest.as_deref())?;

    // Bail early if the file already exists and --force was not given.
    if manifest_path.exists() && !args.force {
        output.warning(&format!(
            "Manifest already exists at {}  (use --force to overwrite)",
            manifest_path.display(),
        ))?;
        return Ok(());
    }

    let manifest = Manifest {
        root: "app".into(),
        inputs: vec!["templates/entity".into()],
        data: Default::default(),
    };
    let toml = toml::to_string_pretty(&manifest).map_err(|e| CliError::ManifestError {
        message: format!("failed to serialise starter manifest: {e}"),
        source: Some(Box::new(e)),
    })?;

    if let Some(parent) = manifest_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir(parent)?;
    }
    write_file(&manifest_path, &toml)?;
    info!(path = %manifest_path.display(), "Manifest written");

    // Drop a sample template unless one is already there.
    let template_path = base.join(SAMPLE_TEMPLATE_PATH);
    if !template_path.exists() {
        if let Some(parent) = template_path.parent() {
            create_dir(parent)?;
        }
        write_file(&template_path, SAMPLE_TEMPLATE)?;
        output.success(&format!(
            "Sample template created at {}",
            template_path.display(),
        ))?;
    }

    output.success(&format!(
        "Manifest created at {}",
        manifest_path.display(),
    ))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print("  domgen new <domain>   # scaffold your first domain")?;

    Ok(())
}

fn create_dir(path: &Path) -> CliResult<()> {
    std::fs::create_dir_all(path).map_err(|e| CliError::IoError {
        message: format!("failed to create directory '{}'", path.display()),
        source: e,
    })
}

fn write_file(path: &Path, content: &str) -> CliResult<()> {
    std::fs::write(path, content).map_err(|e| CliError::IoError {
        message: format!("failed to write '{}'", path.display()),
        source: e,
    })
}
