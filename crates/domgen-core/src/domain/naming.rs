//! The output-naming rule.
//!
//! Every file discovered under a template tree is either a template file
//! (its extension is the template marker) or a static asset (anything else,
//! including extensionless marker files like `.keep`). The two cases are an
//! explicit enumeration rather than suffix checks scattered through the
//! walk:
//!
//! - [`FileKind::Template`]: the base name has every occurrence of the
//!   naming token replaced by the domain name and the extension is fixed to
//!   the rendered extension. `domain_entity.tmpl` + domain `user` →
//!   `user_entity.go`.
//! - [`FileKind::Asset`]: name and extension are mirrored unchanged.

use std::path::Path;

/// Classification of one input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Marked for token substitution and extension fixing.
    Template,
    /// Mirrored verbatim (still executed by the template engine; files
    /// without directives render unchanged).
    Asset,
}

/// The naming convention applied while pairing template files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingRule {
    /// Literal substring replaced by the domain name in template base names.
    pub token: String,
    /// Extension (without dot) that marks a file as a template.
    pub template_ext: String,
    /// Extension (without dot) rendered template files receive.
    pub rendered_ext: String,
}

impl Default for NamingRule {
    fn default() -> Self {
        Self {
            token: "domain".into(),
            template_ext: "tmpl".into(),
            rendered_ext: "go".into(),
        }
    }
}

impl NamingRule {
    /// Classify a file by its extension.
    pub fn classify(&self, file_name: &str) -> FileKind {
        match Path::new(file_name).extension() {
            Some(ext) if ext == self.template_ext.as_str() => FileKind::Template,
            _ => FileKind::Asset,
        }
    }

    /// Compute the output base name for one input file.
    ///
    /// Template files always render to source files, never to another
    /// template; assets keep their name byte-for-byte.
    pub fn output_name(&self, domain: &str, file_name: &str) -> String {
        match self.classify(file_name) {
            FileKind::Template => {
                let stem = Path::new(file_name)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_else(|| file_name.to_owned());
                format!(
                    "{}.{}",
                    stem.replace(self.token.as_str(), domain),
                    self.rendered_ext
                )
            }
            FileKind::Asset => file_name.to_owned(),
        }
    }
}
