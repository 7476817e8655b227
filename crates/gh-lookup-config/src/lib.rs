//! Configuration and file management for gh-user-lookup
//!
//! This crate provides:
//! - Application configuration (AppConfig) loaded from TOML
//! - Config file discovery (current directory, then home directory)
//! - Config and cache directory paths

pub mod app_config;
pub mod config_file;
pub mod paths;

pub use app_config::{AppConfig, DEFAULT_API_BASE_URL};
pub use config_file::{load_config_file, CONFIG_FILE};
pub use paths::{cache_dir, config_dir};
