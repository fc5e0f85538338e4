//! Infrastructure adapters for domgen.
//!
//! This crate implements the ports defined in
//! `domgen_core::application::ports`. It contains all external dependencies
//! and I/O operations.

pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::TeraEngine;
