//! Tera-backed template engine.
//!
//! Each file is parsed as a standalone one-off template: domgen renders
//! trees of independent files, so there is no shared template registry and
//! nothing to cache. Parse failures and execution failures map to distinct
//! error variants so callers can tell a broken template apart from a
//! missing data-context value.

use std::error::Error as _;
use std::path::Path;

use ::tera::{Context, Tera};
use tracing::debug;

use domgen_core::{
    application::ports::TemplateEngine,
    error::{ScaffoldError, ScaffoldResult},
};

/// Template engine backed by [`tera`].
#[derive(Debug, Clone, Copy)]
pub struct TeraEngine;

impl TeraEngine {
    /// Create a new Tera engine adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for TeraEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for TeraEngine {
    fn render(
        &self,
        source_path: &Path,
        source: &str,
        data: &serde_json::Value,
    ) -> ScaffoldResult<String> {
        let name = source_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "template".to_owned());

        let mut tera = Tera::default();
        tera.add_raw_template(&name, source)
            .map_err(|e| ScaffoldError::TemplateSyntax {
                path: source_path.to_path_buf(),
                reason: flatten(&e),
            })?;

        let context =
            Context::from_serialize(data).map_err(|e| ScaffoldError::TemplateRender {
                path: source_path.to_path_buf(),
                reason: flatten(&e),
            })?;

        let rendered = tera.render(&name, &context)
            .map_err(|e| ScaffoldError::TemplateRender {
                path: source_path.to_path_buf(),
                reason: flatten(&e),
            })?;
        debug!(template = %name, bytes = rendered.len(), "Rendered template");
        Ok(rendered)
    }
}

/// Tera's Display output is shallow ("Failed to render ..."); the useful
/// detail lives in the source chain.
fn flatten(e: &::tera::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(source: &str, data: serde_json::Value) -> ScaffoldResult<String> {
        TeraEngine::new().render(Path::new("/tpl/entity/domain_entity.tmpl"), source, &data)
    }

    #[test]
    fn substitutes_variables_from_the_context() {
        let out = render(
            "package {{ LowerDomainName }}\n\ntype {{ PascalDomainName }} struct {}\n",
            json!({ "LowerDomainName": "user", "PascalDomainName": "User" }),
        )
        .unwrap();
        assert_eq!(out, "package user\n\ntype User struct {}\n");
    }

    #[test]
    fn content_without_directives_renders_unchanged() {
        let source = "plain static content\nno directives here\n";
        let out = render(source, json!({})).unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn unclosed_directive_is_a_syntax_error() {
        let err = render("package {{ LowerDomainName", json!({})).unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateSyntax { .. }), "got {err:?}");
    }

    #[test]
    fn missing_context_value_is_a_render_error() {
        let err = render("package {{ MissingKey }}", json!({ "Other": 1 })).unwrap_err();
        match err {
            ScaffoldError::TemplateRender { path, .. } => {
                assert!(path.ends_with("domain_entity.tmpl"));
            }
            other => panic!("expected TemplateRender, got {other:?}"),
        }
    }

    #[test]
    fn non_object_context_is_a_render_error() {
        let err = render("anything", json!("just a string")).unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateRender { .. }));
    }
}
