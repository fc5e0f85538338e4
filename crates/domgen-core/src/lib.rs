//! Domgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the domgen
//! domain scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           domgen-cli (CLI)              │
//! │   (Manifest loading, argument surface)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │           ScaffoldService               │
//! │  guard → pair → render, per DirPair     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Filesystem, TemplateEngine)        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    domgen-adapters (Infrastructure)     │
//! │  (LocalFilesystem, MemoryFilesystem,    │
//! │   TeraEngine)                           │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The domain layer (`ScaffoldConfig`, `NamingRule`, path resolution) is
//! pure: no I/O, no async, synchronous throughout. All filesystem access and
//! template execution go through the ports.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domgen_core::prelude::*;
//! # fn adapters() -> (Box<dyn Filesystem>, Box<dyn TemplateEngine>) { unimplemented!() }
//!
//! let (filesystem, engine) = adapters();
//! let service = ScaffoldService::new(filesystem, engine);
//!
//! let config = ScaffoldConfig::new("/home/me/project", "app", "user")
//!     .with_dir(DirPair::new("templates/domain/entity", "app/user"))
//!     .with_data(serde_json::json!({ "LowerDomainName": "user" }));
//!
//! service.generate(&config).unwrap();
//! ```

// Domain layer (configuration, naming rule, path resolution)
pub mod domain;

// Application layer (ports and the scaffold service)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ScaffoldService, TreeListing,
        ports::{Filesystem, TemplateEngine, WalkEntry},
    };
    pub use crate::domain::{
        DirPair, FileKind, FilePathPair, NamingRule, ScaffoldConfig, resolve_path,
    };
    pub use crate::error::{ScaffoldError, ScaffoldResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
