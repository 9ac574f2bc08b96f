//! SurfsUp Core Library
//!
//! Shared utilities for the climate query service:
//! - Configuration loading (XDG-compliant)
//! - File system checks
//! - Application defaults

mod config;
pub mod fs;

pub use config::{find_config_file, get_xdg_data_dir, load_config, ConfigSource};
pub use fs::is_file;

/// Application name used for XDG paths
pub const APP_NAME: &str = "surfsup";

/// Default server port
pub const DEFAULT_PORT: u16 = 9800;

/// Default pool size for the observation database
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Observation database shipped alongside the service
pub const DEFAULT_DATABASE_PATH: &str = "./Resources/hawaii.sqlite";

/// Database file name looked up in the XDG data directory
pub const DATABASE_FILE_NAME: &str = "hawaii.sqlite";

/// Resolve the observation database when none is configured.
///
/// Prefers `./Resources/hawaii.sqlite`, then `$XDG_DATA_HOME/surfsup/hawaii.sqlite`.
/// If neither exists the local path is returned so the caller reports it.
pub fn default_database_path() -> String {
    if is_file(DEFAULT_DATABASE_PATH) {
        return DEFAULT_DATABASE_PATH.to_string();
    }

    let xdg = get_xdg_data_dir().join(DATABASE_FILE_NAME);
    if xdg.is_file() {
        return xdg.display().to_string();
    }

    DEFAULT_DATABASE_PATH.to_string()
}
