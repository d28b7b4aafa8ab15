//! User settings stored as `config.toml` in the user directory.
//!
//! Every field is optional; a missing file is the default configuration.

use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::paths::LEGACY_CONFIG_FILE;

/// How many entries `latest` and `status` show when no count is given.
pub const DEFAULT_LATEST: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The pet's name; empty until the user picks one.
    pub name: String,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub latest: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            latest: DEFAULT_LATEST,
        }
    }
}

impl Config {
    /// Load from `path`. When the file does not exist, the pet name is taken
    /// from a `config.json` next to it if one is there, and everything else
    /// is defaulted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid
    /// TOML for this schema.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::from_legacy(&path.with_file_name(LEGACY_CONFIG_FILE)));
            }
            Err(e) => {
                return Err(anyhow::Error::new(e)
                    .context(format!("read config {}", path.display())));
            }
        };
        toml::from_str(&content).with_context(|| format!("parse config {}", path.display()))
    }

    /// Defaults, with the pet name from a legacy JSON config when readable.
    fn from_legacy(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read legacy config");
                return Self::default();
            }
        };
        match serde_json::from_str::<LegacyConfig>(&content) {
            Ok(legacy) => {
                tracing::debug!(path = %path.display(), "using legacy config");
                Self {
                    name: legacy.name,
                    ..Self::default()
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed legacy config");
                Self::default()
            }
        }
    }

    /// Load from the default location (see [`crate::paths::config_path`]).
    ///
    /// # Errors
    ///
    /// Returns an error if no user directory can be determined or the file is
    /// unreadable.
    pub fn load_default() -> anyhow::Result<Self> {
        Self::load(&default_path()?)
    }

    /// Write to `path`, creating its parent directory.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem step fails.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create config dir {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("serialize config")?;
        std::fs::write(path, content).with_context(|| format!("write config {}", path.display()))
    }

    /// Write to the default location.
    ///
    /// # Errors
    ///
    /// Returns an error if no user directory can be determined or the write
    /// fails.
    pub fn save_default(&self) -> anyhow::Result<()> {
        self.save(&default_path()?)
    }

    /// The pet's name, or `None` while it is still unnamed.
    pub fn pet_name(&self) -> Option<&str> {
        let name = self.name.trim();
        (!name.is_empty()).then_some(name)
    }
}

/// Shape of the `config.json` written by earlier releases.
#[derive(Deserialize)]
struct LegacyConfig {
    #[serde(default)]
    name: String,
}

fn default_path() -> anyhow::Result<std::path::PathBuf> {
    crate::paths::config_path().ok_or_else(|| anyhow::anyhow!("cannot determine config path"))
}
