//! User configuration loading for deluge-ls.
//!
//! User config location: $XDG_CONFIG_HOME/deluge-ls/deluge-ls.toml
//! Fallback: the platform config directory reported by `dirs::config_dir()`.

use std::path::PathBuf;

use thiserror::Error;

use super::{CONFIG_FILE_NAME, DelugeSettings};

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type UserConfigResult<T> = Result<T, UserConfigError>;

/// Returns the path to the user configuration file.
///
/// The path is determined by:
/// 1. If $XDG_CONFIG_HOME is set: $XDG_CONFIG_HOME/deluge-ls/deluge-ls.toml
/// 2. Otherwise: <config dir>/deluge-ls/deluge-ls.toml
///
/// Returns None if no config directory can be determined.
pub fn user_config_path() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)?;
    Some(base.join("deluge-ls").join(CONFIG_FILE_NAME))
}

/// Load the user configuration layer.
///
/// A missing file is not an error and yields `Ok(None)`.
pub fn load_user_config() -> UserConfigResult<Option<DelugeSettings>> {
    let Some(path) = user_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|source| UserConfigError::Io {
        path: path.clone(),
        source,
    })?;
    toml::from_str(&contents)
        .map(Some)
        .map_err(|source| UserConfigError::Parse { path, source })
}
