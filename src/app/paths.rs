// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! This module provides a single source of truth for the two directories the
//! application reads from: the config directory (`settings.toml`) and the
//! media directory (the `videos/` and `audio/` asset trees).
//!
//! # Path Resolution Order
//!
//! Config directory:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** `--config-dir` - set via [`init_cli_overrides`]
//! 3. **Environment variable** `ZENZONE_CONFIG_DIR`
//! 4. **Platform default** - via `dirs` crate
//!
//! Media directory:
//! 1. **CLI argument** `--media-dir`
//! 2. **Environment variable** `ZENZONE_MEDIA_DIR`
//! 3. **Config value** `[media] base_dir`
//! 4. **Platform default** - data directory + `ZenZone/media`

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "ZenZone";

/// Subdirectory of the data directory holding the default media tree.
const MEDIA_SUBDIR: &str = "media";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ZENZONE_CONFIG_DIR";

/// Environment variable to override the media directory.
pub const ENV_MEDIA_DIR: &str = "ZENZONE_MEDIA_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for media directory (set once at startup).
static CLI_MEDIA_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config and media directories.
///
/// Should be called once at startup, before any path resolution. Later calls
/// are ignored and logged.
pub fn init_cli_overrides(config_dir: Option<String>, media_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
        || CLI_MEDIA_DIR.set(media_dir.map(PathBuf::from)).is_err()
    {
        tracing::warn!("CLI path overrides were already initialized; ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_media_dir() -> Option<PathBuf> {
    CLI_MEDIA_DIR.get().and_then(Clone::clone)
}

/// Reads a directory from an environment variable, ignoring empty values.
fn env_dir(name: &str) -> Option<PathBuf> {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Returns the application config directory path with an optional override.
///
/// Platform defaults:
/// - Linux: `~/.config/ZenZone/`
/// - macOS: `~/Library/Application Support/ZenZone/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\ZenZone\`
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_CONFIG_DIR) {
        return Some(path);
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the media base directory.
///
/// `configured` is the `[media] base_dir` value from `settings.toml`; it
/// only wins over the platform default, never over CLI or environment.
pub fn get_media_dir(configured: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = get_cli_media_dir() {
        return Some(path);
    }

    if let Some(path) = env_dir(ENV_MEDIA_DIR) {
        return Some(path);
    }

    if let Some(path) = configured {
        return Some(path);
    }

    dirs::data_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(MEDIA_SUBDIR);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to prevent parallel tests from interfering with each other's env vars
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir_with_override(None) {
            assert!(
                path.to_string_lossy().contains(APP_NAME),
                "App config dir should contain app name"
            );
        }
    }

    #[test]
    fn override_path_takes_precedence_for_config_dir() {
        let override_path = PathBuf::from("/custom/config/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));
    }

    #[test]
    fn env_var_overrides_default_config_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_CONFIG_DIR, "/env/config");
        let result = get_app_config_dir_with_override(None);
        std::env::remove_var(ENV_CONFIG_DIR);
        assert_eq!(result, Some(PathBuf::from("/env/config")));
    }

    #[test]
    fn empty_env_var_is_ignored() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_MEDIA_DIR, "");
        let result = get_media_dir(Some(PathBuf::from("/from/config")));
        std::env::remove_var(ENV_MEDIA_DIR);
        assert_eq!(result, Some(PathBuf::from("/from/config")));
    }

    #[test]
    fn env_var_beats_configured_media_dir() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(ENV_MEDIA_DIR, "/env/media");
        let result = get_media_dir(Some(PathBuf::from("/from/config")));
        std::env::remove_var(ENV_MEDIA_DIR);
        assert_eq!(result, Some(PathBuf::from("/env/media")));
    }

    #[test]
    fn default_media_dir_lives_under_app_data() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(ENV_MEDIA_DIR);

        if let Some(path) = get_media_dir(None) {
            assert!(path.ends_with(PathBuf::from(APP_NAME).join(MEDIA_SUBDIR)));
        }
    }
}
