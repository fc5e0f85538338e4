//! Implementation of the `domgen inspect` command.
//!
//! Lists the directory tree of an already-generated domain. Useful for
//! verifying a scaffold run without leaving the terminal.

use tracing::instrument;

use domgen_adapters::{LocalFilesystem, TeraEngine};
use domgen_core::{application::ScaffoldService, domain::resolve_path};

use crate::{
    cli::{InspectArgs, InspectFormat, global::GlobalArgs},
    error::{CliError, CliResult},
    manifest::{Manifest, resolve_manifest_path},
    output::OutputManager,
};

/// Execute the `domgen inspect` command.
#[instrument(skip_all, fields(domain = %args.domain))]
pub fn execute(args: InspectArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let (manifest_path, base) = resolve_manifest_path(global.manifest.as_deref())?;
    let manifest = Manifest::load(&manifest_path)?;

    let domain_dir = std::path::PathBuf::from(&args.domain);
    let domain_path = resolve_path(&base, [&manifest.root, &domain_dir]);
    if !domain_path.is_dir() {
        return Err(CliError::DomainNotFound {
            name: args.domain,
            path: domain_path,
        });
    }

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(TeraEngine::new()));
    let listing = service.inspect(&domain_path)?;

    match args.format {
        InspectFormat::Tree => {
            output.header(&domain_path.display().to_string())?;
            output.print(&format!("Directories ({}):", listing.dirs.len()))?;
            for dir in &listing.dirs {
                output.print(&format!("  {dir}/"))?;
            }
            output.print(&format!("Files ({}):", listing.files.len()))?;
            for file in &listing.files {
                output.print(&format!("  {file}"))?;
            }
        }
        InspectFormat::Json => {
            // Machine-readable output goes straight to stdout, bypassing
            // quiet mode.
            let json = serde_json::json!({
                "domain": args.domain,
                "path": domain_path,
                "dirs": listing.dirs,
                "files": listing.files,
            });
            println!("{json:#}");
        }
    }

    Ok(())
}
