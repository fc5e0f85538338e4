//! Command implementations.

pub mod completions;
pub mod init;
pub mod inspect;
pub mod new;
