//! Shared error model and configuration for selkit.
//!
//! This crate is the foundation depended on by all other selkit crates.
//! It provides:
//! - [`SelkitError`], the unified error type
//! - Configuration ([`AppConfig`], config loading)

pub mod config;
pub mod error;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, OutputConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{Result, SelkitError, ValidationRule};
