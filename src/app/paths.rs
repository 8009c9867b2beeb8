// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`get_app_config_dir_with_override`] (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`ICED_VQA_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedVqa";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_VQA_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` CLI argument.
///
/// Only the first call has an effect; later calls are ignored with a warning.
pub fn init_cli_overrides(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("config dir override already initialized, ignoring");
    }
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// Platform defaults:
/// - Linux: `~/.config/IcedVqa/`
/// - macOS: `~/Library/Application Support/IcedVqa/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedVqa\`
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// `override_path` has the highest priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Serializes tests that touch process environment variables.
#[cfg(test)]
pub(crate) fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    use std::sync::Mutex;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());
    ENV_MUTEX
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_dir_contains_app_name() {
        let _lock = env_lock();
        std::env::remove_var(ENV_CONFIG_DIR);

        if let Some(path) = get_app_config_dir() {
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
        let _lock = env_lock();
        let test_path = "/test/config/dir";
        std::env::set_var(ENV_CONFIG_DIR, test_path);

        let result = get_app_config_dir();
        assert_eq!(result, Some(PathBuf::from(test_path)));

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn empty_env_var_uses_default() {
        let _lock = env_lock();
        std::env::set_var(ENV_CONFIG_DIR, "");

        if let Some(path) = get_app_config_dir() {
            assert!(path.to_string_lossy().contains(APP_NAME));
        }

        std::env::remove_var(ENV_CONFIG_DIR);
    }

    #[test]
    fn override_path_takes_precedence_over_env_var() {
        let _lock = env_lock();
        std::env::set_var(ENV_CONFIG_DIR, "/env/path");

        let override_path = PathBuf::from("/override/path");
        let result = get_app_config_dir_with_override(Some(override_path.clone()));
        assert_eq!(result, Some(override_path));

        std::env::remove_var(ENV_CONFIG_DIR);
    }
}
