//! Input/output, configuration and error handling

/// TOML catalog loading
pub mod catalog_file;
/// Command-line interface
pub mod cli;
/// Algorithm constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// PNG layout preview
pub mod image;
/// Log subscriber setup
pub mod logging;
