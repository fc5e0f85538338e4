//! Core domain layer for domgen.
//!
//! Pure business logic: the scaffold configuration, the file-naming rule,
//! and path resolution. No I/O happens here - filesystem access and template
//! execution are handled via the ports defined in the application layer.

pub mod config;
pub mod naming;

pub use config::{DirPair, FilePathPair, ScaffoldConfig, resolve_path};
pub use naming::{FileKind, NamingRule};
