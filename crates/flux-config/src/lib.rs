//! Configuration and file paths for flux-shops
//!
//! This crate provides:
//! - Platform directories for config and log files
//! - Configuration file lookup (TOML)
//! - Application configuration (AppConfig)

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, SourceConfig};
pub use config_file::load_config_file;
