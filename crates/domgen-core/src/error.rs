//! Unified error handling for Domgen Core.
//!
//! One enum covers every way a scaffold run can fail. Variants carry the
//! path and the failing operation so callers can diagnose without re-running
//! with verbose logging. No variant is retried anywhere in the core.

use std::path::PathBuf;
use thiserror::Error;

/// Root error type for Domgen Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaffoldError {
    /// The target domain directory already exists under the configured root.
    ///
    /// Kept distinct from generic I/O errors so callers can special-case the
    /// overwrite guard (e.g. suggest `--force`).
    #[error("domain already exists at {path}")]
    DomainExists { path: PathBuf },

    /// A configured template input directory does not exist.
    #[error("template input directory not found: {path}")]
    InputNotFound { path: PathBuf },

    /// A configured template input path exists but is not a directory.
    #[error("template input is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A filesystem operation failed at the OS boundary.
    #[error("I/O failure while trying to {op} '{path}': {reason}")]
    Io {
        path: PathBuf,
        op: &'static str,
        reason: String,
    },

    /// A template file failed to parse.
    #[error("template '{path}' failed to parse: {reason}")]
    TemplateSyntax { path: PathBuf, reason: String },

    /// Template execution failed, typically a data-context mismatch.
    #[error("rendering template '{path}' failed: {reason}")]
    TemplateRender { path: PathBuf, reason: String },
}

impl ScaffoldError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DomainExists { path } => vec![
                format!("The domain directory '{}' already exists", path.display()),
                "Choose a different domain name".into(),
                "Or remove the existing directory and re-run".into(),
            ],
            Self::InputNotFound { path } => vec![
                format!("No template directory at '{}'", path.display()),
                "Check the input paths in your manifest".into(),
            ],
            Self::NotADirectory { path } => vec![
                format!("'{}' is a file, not a template directory", path.display()),
                "Input paths must point at directories of template files".into(),
            ],
            Self::Io { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Partial output from this run is left on disk and must be removed manually".into(),
            ],
            Self::TemplateSyntax { path, .. } => vec![
                format!("Fix the template syntax in '{}'", path.display()),
            ],
            Self::TemplateRender { path, .. } => vec![
                format!("Template '{}' references a value missing from the data context", path.display()),
                "Add the missing key to the [data] section of your manifest".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DomainExists { .. } => ErrorCategory::Validation,
            Self::InputNotFound { .. } | Self::NotADirectory { .. } => ErrorCategory::NotFound,
            Self::Io { .. } => ErrorCategory::Internal,
            Self::TemplateSyntax { .. } | Self::TemplateRender { .. } => ErrorCategory::Template,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Template,
    Internal,
}

/// Convenient result type alias.
pub type ScaffoldResult<T> = Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_exists_is_validation() {
        let err = ScaffoldError::DomainExists {
            path: PathBuf::from("app/user"),
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn missing_input_is_not_found() {
        let err = ScaffoldError::InputNotFound {
            path: PathBuf::from("templates/entity"),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn template_errors_share_a_category() {
        let syntax = ScaffoldError::TemplateSyntax {
            path: PathBuf::from("x.tmpl"),
            reason: "unexpected end of input".into(),
        };
        let render = ScaffoldError::TemplateRender {
            path: PathBuf::from("x.tmpl"),
            reason: "variable not found".into(),
        };
        assert_eq!(syntax.category(), ErrorCategory::Template);
        assert_eq!(render.category(), ErrorCategory::Template);
    }

    #[test]
    fn messages_carry_the_path() {
        let err = ScaffoldError::Io {
            path: PathBuf::from("app/user/entity"),
            op: "create directory",
            reason: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("app/user/entity"));
        assert!(msg.contains("create directory"));
    }

    #[test]
    fn suggestions_are_never_empty() {
        let errors = [
            ScaffoldError::DomainExists { path: "a".into() },
            ScaffoldError::InputNotFound { path: "b".into() },
            ScaffoldError::NotADirectory { path: "c".into() },
            ScaffoldError::TemplateSyntax {
                path: "d".into(),
                reason: "r".into(),
            },
        ];
        for err in errors {
            assert!(!err.suggestions().is_empty(), "no suggestions for {err}");
        }
    }
}
