//! Implementation of the `domgen new` command.
//!
//! Responsibility: translate CLI arguments and the project manifest into a
//! `ScaffoldConfig`, call the core scaffold service, and display results.
//! No business logic lives here.

use serde_json::json;
use tracing::{debug, info, instrument};

use domgen_adapters::{LocalFilesystem, TeraEngine};
use domgen_core::{
    application::ScaffoldService,
    domain::{DirPair, ScaffoldConfig, resolve_path},
    error::ScaffoldError,
};

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    error::{CliError, CliResult},
    manifest::{Manifest, resolve_manifest_path},
    output::OutputManager,
};

/// Execute the `domgen new` command.
///
/// Dispatch sequence:
/// 1. Validate the domain name
/// 2. Load the manifest and build the `ScaffoldConfig`
/// 3. Early-exit if `--dry-run` (pair files, print destinations, write nothing)
/// 4. Execute scaffolding via `ScaffoldService`
/// 5. Print next-steps guidance
#[instrument(skip_all, fields(domain = %args.domain))]
pub fn execute(args: NewArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    // 1. Validate input
    validate_domain_name(&args.domain)?;

    // 2. Manifest → config
    let (manifest_path, base) = resolve_manifest_path(global.manifest.as_deref())?;
    let manifest = Manifest::load(&manifest_path)?;
    let data = build_data(&args.domain, &manifest)?;

    let root = args.root.clone().unwrap_or_else(|| manifest.root.clone());
    let domain_output = root.join(&args.domain);
    let dirs: Vec<DirPair> = manifest
        .inputs
        .iter()
        .map(|input| DirPair::new(input, &domain_output))
        .collect();

    let config = ScaffoldConfig::new(&base, &root, &args.domain)
        .with_dirs(dirs)
        .with_data(data)
        .with_force(args.force);

    debug!(
        root = %root.display(),
        inputs = manifest.inputs.len(),
        force = args.force,
        "Scaffold configuration built"
    );

    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(TeraEngine::new()));

    // 3. Dry run: describe but do not write. The guard is bypassed under
    //    --force the same way `generate` bypasses it, so the preview matches
    //    what a real run would do.
    if args.dry_run {
        let domain_path = match service.check_domain(&config) {
            Ok(path) => path,
            Err(ScaffoldError::DomainExists { path }) if config.force => {
                output.warning(&format!(
                    "Would remove existing domain at {}",
                    path.display(),
                ))?;
                path
            }
            Err(e) => return Err(e.into()),
        };
        output.info(&format!(
            "Dry run: would scaffold '{}' at {}",
            args.domain,
            domain_path.display(),
        ))?;
        for dir in &config.dirs {
            let input = resolve_path(&config.base, [&dir.input]);
            let out_dir = resolve_path(&config.base, [&dir.output]);
            for pair in service.pair_files(&config.domain, &input, &out_dir)? {
                output.print(&format!("  {}", pair.destination.display()))?;
            }
        }
        return Ok(());
    }

    // 4. Scaffold
    output.header(&format!("Scaffolding '{}'...", args.domain))?;
    info!(domain = %args.domain, "Scaffold started");

    service.generate(&config)?;

    info!(domain = %args.domain, "Scaffold completed");

    // 5. Success + next steps
    output.success(&format!(
        "Domain '{}' created at {}",
        args.domain,
        resolve_path(&base, [&domain_output]).display(),
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  domgen inspect {}", args.domain))?;
        output.print("  # Wire the new domain into your application")?;
    }

    Ok(())
}

// ── Validation ────────────────────────────────────────────────────────────────

fn validate_domain_name(name: &str) -> CliResult<()> {
    if name.is_empty() {
        return Err(CliError::InvalidDomainName {
            name: name.into(),
            reason: "name cannot be empty".into(),
        });
    }
    if !name.chars().next().is_some_and(|c| c.is_ascii_lowercase()) {
        return Err(CliError::InvalidDomainName {
            name: name.into(),
            reason: "name must start with a lowercase letter".into(),
        });
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(CliError::InvalidDomainName {
            name: name.into(),
            reason: "only lowercase letters, digits, and underscores are allowed".into(),
        });
    }
    Ok(())
}

// ── Data context ──────────────────────────────────────────────────────────────

/// Build the template data context: manifest `[data]` entries plus the
/// derived name variants. Derived keys win on collision.
fn build_data(domain: &str, manifest: &Manifest) -> CliResult<serde_json::Value> {
    let mut map = manifest.data_as_json()?;
    map.insert("LowerDomainName".into(), json!(domain));
    map.insert("SnakeDomainName".into(), json!(domain));
    map.insert("PascalDomainName".into(), json!(pascal_case(domain)));
    Ok(serde_json::Value::Object(map))
}

/// `payment_intent` → `PaymentIntent`.
fn pascal_case(name: &str) -> String {
    name.split('_')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
