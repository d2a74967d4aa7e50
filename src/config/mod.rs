//! Configuration module
//!
//! This module contains components for loading and validating configuration.

pub mod loader;
mod model;

pub use loader::{load_config, load_config_for_testing, read_or_create, write_default_config};
pub use model::Config;
