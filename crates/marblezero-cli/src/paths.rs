//! Centralised marblezero user-directory resolution.
//!
//! Priority for the user-level base directory:
//!   1. `MARBLEZERO_HOME` env var (if set and non-empty)
//!   2. `~/.config/marblezero`, if that directory already exists (the location
//!      earlier releases used on every platform)
//!   3. `dirs::config_dir().map(|d| d.join("marblezero"))` (platform default)
//!
//! The history log may additionally be moved on its own:
//!   1. `MARBLEZERO_HISTORY` env var (highest priority)
//!   2. `{user_dir}/history_wal`

use std::path::PathBuf;

/// File name of the append-only history log inside the user directory.
pub const HISTORY_FILE: &str = "history_wal";

/// File name of the user configuration inside the user directory.
pub const CONFIG_FILE: &str = "config.toml";

/// JSON configuration written by earlier releases; read when `config.toml` is absent.
pub const LEGACY_CONFIG_FILE: &str = "config.json";

/// Read a path-valued env var, treating an empty value as unset.
fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

fn legacy_dir() -> Option<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".config").join("marblezero"))
        .filter(|d| d.is_dir())
}

/// Returns the marblezero user-level base directory.
pub fn user_dir() -> Option<PathBuf> {
    env_path("MARBLEZERO_HOME")
        .or_else(legacy_dir)
        .or_else(|| dirs::config_dir().map(|d| d.join("marblezero")))
}

/// Returns the history log path.
pub fn history_path() -> Option<PathBuf> {
    env_path("MARBLEZERO_HISTORY").or_else(|| user_dir().map(|d| d.join(HISTORY_FILE)))
}

/// Returns the user config path.
pub fn config_path() -> Option<PathBuf> {
    user_dir().map(|d| d.join(CONFIG_FILE))
}
