//! Template engine adapters.

pub mod tera;

pub use self::tera::TeraEngine;
