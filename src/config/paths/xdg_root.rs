//! XDG Base Directory utilities for user configuration.

use std::path::PathBuf;

/// Get XDG config home directory
///
/// Returns `$XDG_CONFIG_HOME` if set, otherwise defaults to `$HOME/.config`
pub fn config_home() -> Option<PathBuf> {
    if let Ok(xdg_config_home) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg_config_home.is_empty() {
            return Some(PathBuf::from(xdg_config_home));
        }
    }

    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config"))
}

/// Path of the user config file: `$XDG_CONFIG_HOME/simfasta/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    config_home().map(|dir| dir.join("simfasta").join("config.toml"))
}
