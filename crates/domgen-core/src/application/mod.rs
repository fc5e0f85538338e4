//! Application layer: ports and the scaffold orchestration service.

pub mod ports;
pub mod services;

pub use services::scaffold_service::{ScaffoldService, TreeListing};
