// Standard library
use std::path::PathBuf;

// 3rd party crates
use serde::Deserialize;

/// Settings as deserialized from the process environment, prior to
/// validation.
#[derive(Debug, Default, Deserialize)]
pub struct RawSettings {
    pub api_key: Option<String>,
    pub api_key_file: Option<PathBuf>,
    pub log_level: Option<String>,
    pub update_interval: Option<u64>,
    pub update_on_start: Option<bool>,
    pub create_missing_zones: Option<bool>,
    pub zones: Option<String>,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub log_level: String,
    pub update_interval: u64,
    pub update_on_start: bool,
    pub create_missing_zones: bool,
    pub zone_names: Vec<String>,
}
