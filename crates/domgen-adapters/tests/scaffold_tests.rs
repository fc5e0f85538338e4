//! End-to-end scaffolding tests against the real adapters.
//!
//! Each test builds a template tree inside a temp directory, runs the
//! scaffold service with [`LocalFilesystem`] and [`TeraEngine`], and checks
//! the produced tree on disk.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use domgen_adapters::{LocalFilesystem, TeraEngine};
use domgen_core::prelude::*;

fn service() -> ScaffoldService {
    ScaffoldService::new(Box::new(LocalFilesystem::new()), Box::new(TeraEngine::new()))
}

fn write(base: &Path, rel: &str, content: &str) {
    let path = base.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn user_config(base: &Path) -> ScaffoldConfig {
    ScaffoldConfig::new(base, "app", "user")
        .with_dir(DirPair::new("templates/entity", "app/user"))
        .with_data(serde_json::json!({
            "LowerDomainName": "user",
            "PascalDomainName": "User",
        }))
}

#[test]
fn generates_a_fresh_domain_from_templates() {
    let temp = TempDir::new().unwrap();
    let base = temp.path();
    write(
        base,
        "templates/entity/domain_entity.tmpl",
        "package {{ LowerDomainName }}\n\ntype {{ PascalDomainName }} struct {}\n",
    );
    write(
        base,
        "templates/entity/domain_seeds.tmpl",
        "package {{ LowerDomainName }}\n\nfunc Seed() {}\n",
    );

    service().generate(&user_config(base)).unwrap();

    let entity = fs::read_to_string(base.join("app/user/entity/user_entity.go")).unwrap();
    assert_eq!(entity, "package user\n\ntype User struct {}\n");

    let seeds = fs::read_to_string(base.join("app/user/entity/user_seeds.go")).unwrap();
    assert_eq!(seeds, "package user\n\nfunc Seed() {}\n");
}

#[test]
fn second_run_is_rejected_and_leaves_the_tree_untouched() {
    let temp = TempDir::new().unwrap();
    let base = temp.path();
    write(
        base,
        "templates/entity/domain_entity.tmpl",
        "package {{ LowerDomainName }}\n",
    );

    let config = user_config(base);
    service().generate(&config).unwrap();

    let generated = base.join("app/user/entity/user_entity.go");
    fs::write(&generated, "manually edited\n").unwrap();

    let err = service().generate(&config).unwrap_err();
    assert!(matches!(err, ScaffoldError::DomainExists { .. }), "got {err:?}");
    assert_eq!(fs::read_to_string(&generated).unwrap(), "manually edited\n");
}

#[test]
fn force_regenerates_an_existing_domain_from_scratch() {
    let temp = TempDir::new().unwrap();
    let base = temp.path();
    write(
        base,
        "templates/entity/domain_entity.tmpl",
        "package {{ LowerDomainName }}\n",
    );

    let config = user_config(base);
    service().generate(&config).unwrap();

    // A leftover file from a previous layout must not survive --force.
    write(base, "app/user/stale/old_file.go", "stale\n");

    service().generate(&config.clone().with_force(true)).unwrap();
    assert!(base.join("app/user/entity/user_entity.go").exists());
    assert!(!base.join("app/user/stale").exists());
}

#[test]
fn nested_directories_and_assets_are_mirrored() {
    let temp = TempDir::new().unwrap();
    let base = temp.path();
    write(
        base,
        "templates/handler/http/domain_routes.tmpl",
        "package {{ LowerDomainName }}\n",
    );
    write(base, "templates/handler/rabbitmq/.keep", "");

    let config = ScaffoldConfig::new(base, "app", "order")
        .with_dir(DirPair::new("templates/handler", "app/order"))
        .with_data(serde_json::json!({ "LowerDomainName": "order" }));
    service().generate(&config).unwrap();

    let routes = base.join("app/order/handler/http/order_routes.go");
    assert_eq!(fs::read_to_string(routes).unwrap(), "package order\n");

    // Assets keep their names and pass through the engine untouched.
    let keep = base.join("app/order/handler/rabbitmq/.keep");
    assert_eq!(fs::read_to_string(keep).unwrap(), "");
}

#[test]
fn multiple_input_directories_land_under_one_domain() {
    let temp = TempDir::new().unwrap();
    let base = temp.path();
    write(
        base,
        "templates/entity/domain_entity.tmpl",
        "package {{ LowerDomainName }}\n",
    );
    write(
        base,
        "templates/usecase/domain_usecase.tmpl",
        "package {{ LowerDomainName }}\n",
    );

    let config = ScaffoldConfig::new(base, "app", "billing")
        .with_dirs([
            DirPair::new("templates/entity", "app/billing"),
            DirPair::new("templates/usecase", "app/billing"),
        ])
        .with_data(serde_json::json!({ "LowerDomainName": "billing" }));
    service().generate(&config).unwrap();

    assert!(base.join("app/billing/entity/billing_entity.go").exists());
    assert!(base.join("app/billing/usecase/billing_usecase.go").exists());
}

#[test]
fn missing_input_directory_aborts_without_output() {
    let temp = TempDir::new().unwrap();
    let base = temp.path();

    let err = service().generate(&user_config(base)).unwrap_err();
    match err {
        ScaffoldError::InputNotFound { path } => {
            assert!(path.ends_with("templates/entity"));
        }
        other => panic!("expected InputNotFound, got {other:?}"),
    }
    assert!(!base.join("app").exists());
}

#[test]
fn input_that_is_a_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let base = temp.path();
    write(base, "templates/entity", "this is a file, not a directory");

    let err = service().generate(&user_config(base)).unwrap_err();
    assert!(matches!(err, ScaffoldError::NotADirectory { .. }), "got {err:?}");
}

#[test]
fn render_failure_leaves_earlier_files_and_an_empty_destination() {
    let temp = TempDir::new().unwrap();
    let base = temp.path();
    // Walk order is lexical, so a_ok renders before b_bad and c_ok never runs.
    write(
        base,
        "templates/entity/domain_a_ok.tmpl",
        "package {{ LowerDomainName }}\n",
    );
    write(base, "templates/entity/domain_b_bad.tmpl", "package {{ unclosed\n");
    write(
        base,
        "templates/entity/domain_c_ok.tmpl",
        "package {{ LowerDomainName }}\n",
    );

    let err = service().generate(&user_config(base)).unwrap_err();
    assert!(matches!(err, ScaffoldError::TemplateSyntax { .. }), "got {err:?}");

    let entity = base.join("app/user/entity");
    assert_eq!(
        fs::read_to_string(entity.join("user_a_ok.go")).unwrap(),
        "package user\n"
    );
    // The failing file was created before parsing and stays behind, empty.
    assert_eq!(fs::read_to_string(entity.join("user_b_bad.go")).unwrap(), "");
    assert!(!entity.join("user_c_ok.go").exists());
}

#[test]
fn inspect_lists_the_generated_tree() {
    let temp = TempDir::new().unwrap();
    let base = temp.path();
    write(
        base,
        "templates/entity/domain_entity.tmpl",
        "package {{ LowerDomainName }}\n",
    );
    write(
        base,
        "templates/handler/http/domain_routes.tmpl",
        "package {{ LowerDomainName }}\n",
    );

    let config = ScaffoldConfig::new(base, "app", "user")
        .with_dirs([
            DirPair::new("templates/entity", "app/user"),
            DirPair::new("templates/handler", "app/user"),
        ])
        .with_data(serde_json::json!({ "LowerDomainName": "user" }));
    let svc = service();
    svc.generate(&config).unwrap();

    let listing = svc.inspect(&base.join("app/user")).unwrap();
    assert_eq!(listing.dirs, vec!["entity", "handler", "http"]);
    assert_eq!(listing.files, vec!["user_entity.go", "user_routes.go"]);
}

#[test]
fn memory_and_local_filesystems_produce_the_same_tree() {
    use domgen_adapters::MemoryFilesystem;

    let memory = MemoryFilesystem::new();
    memory.seed_file(
        "/work/templates/entity/domain_entity.tmpl",
        "package {{ LowerDomainName }}\n",
    );

    let svc = ScaffoldService::new(Box::new(memory.clone()), Box::new(TeraEngine::new()));
    let config = ScaffoldConfig::new("/work", "app", "user")
        .with_dir(DirPair::new("templates/entity", "app/user"))
        .with_data(serde_json::json!({ "LowerDomainName": "user" }));
    svc.generate(&config).unwrap();

    assert_eq!(
        memory.read_file(Path::new("/work/app/user/entity/user_entity.go")),
        Some("package user\n".to_owned())
    );
}
