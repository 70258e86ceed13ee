// Standard library
use std::fs;

// 3rd party crates
use config::{Config, Environment};

// Current module imports
use super::constants::{API_KEY_GROUPS, DEFAULT_LOG_LEVEL, DEFAULT_UPDATE_INTERVAL};
use super::errors::SettingsError;
use super::types::{RawSettings, Settings};

impl Settings {
    /// Loads and validates settings from the process environment.
    pub fn load() -> Result<Self, SettingsError> {
        let raw: RawSettings = Config::builder()
            .add_source(Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()?;

        Self::from_raw(raw)
    }

    pub(crate) fn from_raw(raw: RawSettings) -> Result<Self, SettingsError> {
        let api_key = resolve_api_key(&raw)?;

        if !is_valid_api_key(&api_key) {
            return Err(SettingsError::InvalidApiKey);
        }

        let log_level = raw
            .log_level
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();
        match log_level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => {}
            _ => return Err(SettingsError::InvalidLogLevel(log_level)),
        }

        let update_interval = raw.update_interval.unwrap_or(DEFAULT_UPDATE_INTERVAL);
        if update_interval == 0 {
            return Err(SettingsError::InvalidUpdateInterval(update_interval));
        }

        let zone_names = parse_zone_names(raw.zones.as_deref().unwrap_or(""));
        if zone_names.is_empty() {
            return Err(SettingsError::NoZones);
        }

        Ok(Self {
            api_key,
            log_level,
            update_interval,
            update_on_start: raw.update_on_start.unwrap_or(true),
            create_missing_zones: raw.create_missing_zones.unwrap_or(false),
            zone_names,
        })
    }
}

/// Resolves the API key, preferring the secret file over the plain
/// variable. A configured but missing file falls through to `API_KEY`.
fn resolve_api_key(raw: &RawSettings) -> Result<String, SettingsError> {
    if let Some(path) = &raw.api_key_file {
        if path.exists() {
            let contents = fs::read_to_string(path).map_err(|source| SettingsError::ApiKeyFile {
                path: path.clone(),
                source,
            })?;

            let api_key = contents.trim().to_string();
            if api_key.is_empty() {
                return Err(SettingsError::EmptyApiKeyFile(path.clone()));
            }

            return Ok(api_key);
        }
    }

    raw.api_key
        .clone()
        .filter(|key| !key.is_empty())
        .ok_or(SettingsError::MissingApiKey)
}

/// Checks the provider's key shape: hyphen-joined hex groups of fixed
/// lengths.
fn is_valid_api_key(key: &str) -> bool {
    let groups: Vec<&str> = key.split('-').collect();

    groups.len() == API_KEY_GROUPS.len()
        && groups
            .iter()
            .zip(API_KEY_GROUPS)
            .all(|(group, len)| group.len() == len && group.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// Splits the comma-separated zone list, dropping entries that are not
/// syntactically valid domain names and collapsing duplicates.
fn parse_zone_names(zones: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();

    for name in zones.split(',').map(str::trim) {
        if is_valid_domain(name) && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }

    names
}

/// Syntactic domain check: dot-separated labels of alphanumerics and
/// inner hyphens.
fn is_valid_domain(name: &str) -> bool {
    if name.is_empty() || name.len() > 253 || !name.contains('.') {
        return false;
    }

    name.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}
