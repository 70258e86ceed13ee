/// Default settings
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_UPDATE_INTERVAL: u64 = 30;

/// Hyphen-separated hex group lengths of a Bunny API key.
pub const API_KEY_GROUPS: [usize; 9] = [8, 4, 4, 4, 20, 4, 4, 4, 12];
