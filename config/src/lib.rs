//! Configuration loading and persistence for Reckon.
//!
//! The config file lives at `~/.reckon/config.toml` (or wherever
//! `RECKON_CONFIG` points):
//!
//! ```toml
//! [appearance]
//! dark_mode = true
//! ascii_only = false
//! ```
//!
//! Only the theme preference is ever written back. Writes go through
//! `toml_edit` so user comments and unknown keys survive.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use reckon_types::ui::{Theme, UiOptions};
use reckon_utils::{AtomicWriteOptions, atomic_write_with_options};

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "RECKON_CONFIG";

#[derive(Debug, Default, Clone, Deserialize)]
pub struct ReckonConfig {
    pub appearance: Option<AppearanceConfig>,
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct AppearanceConfig {
    /// Persisted theme preference. Light unless set.
    #[serde(default)]
    pub dark_mode: bool,
    /// Use ASCII-only glyphs for operators and the delete key.
    #[serde(default)]
    pub ascii_only: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl ReckonConfig {
    /// Load the config from its default location.
    ///
    /// A missing file is not an error; it yields `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        let appearance = self.appearance.clone().unwrap_or_default();
        UiOptions {
            theme: Theme::from_dark_mode(appearance.dark_mode),
            ascii_only: appearance.ascii_only,
        }
    }

    /// Persist the theme preference to the config file at `path`.
    ///
    /// Creates the file and parent directory if they don't exist.
    pub fn persist_dark_mode(path: &Path, dark_mode: bool) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = if path.exists() {
            fs::read_to_string(path)?
        } else {
            String::new()
        };

        let mut doc = content
            .parse::<toml_edit::DocumentMut>()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let appearance = doc
            .entry("appearance")
            .or_insert(toml_edit::table())
            .as_table_like_mut()
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    "`appearance` in config is not a table",
                )
            })?;
        appearance.insert("dark_mode", toml_edit::value(dark_mode));

        let options = AtomicWriteOptions {
            sync_parent_dir: true,
            ..AtomicWriteOptions::default()
        };
        atomic_write_with_options(path, doc.to_string().as_bytes(), options)?;
        tracing::debug!(path = %path.display(), dark_mode, "Persisted theme preference");
        Ok(())
    }
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        if !path.is_empty() {
            return Some(PathBuf::from(path));
        }
    }
    dirs::home_dir().map(|home| home.join(".reckon").join("config.toml"))
}
