// Copyright (c) Contributors to the scratch project.
// SPDX-License-Identifier: Apache-2.0

//! Per-OS resolution of the directories scratch works out of.

use std::path::{Path, PathBuf};

#[cfg(test)]
#[path = "./paths_test.rs"]
mod paths_test;

/// Configuration directory holding the registry database.
///
/// `$XDG_CONFIG_HOME/scratch` when the variable is set and non-empty,
/// otherwise `~/.config/scratch`. macOS deliberately follows the unix
/// convention rather than Application Support; Windows uses the platform
/// config directory.
pub fn config_dir() -> crate::Result<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join(crate::APP_NAME));
        }
    }
    fallback_config_dir()
}

/// Data directory under which new environments are created by default.
///
/// `$XDG_DATA_HOME/scratch` when the variable is set and non-empty,
/// otherwise `~/.local/share/scratch`; Windows uses the platform cache
/// directory.
pub fn data_dir() -> crate::Result<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
        if !xdg.is_empty() {
            return Ok(PathBuf::from(xdg).join(crate::APP_NAME));
        }
    }
    fallback_data_dir()
}

#[cfg(not(windows))]
fn fallback_config_dir() -> crate::Result<PathBuf> {
    Ok(home_dir()?.join(".config").join(crate::APP_NAME))
}

#[cfg(windows)]
fn fallback_config_dir() -> crate::Result<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(crate::APP_NAME))
        .ok_or_else(|| {
            crate::Error::ValidationFailed("Cannot resolve the user config directory".to_string())
        })
}

#[cfg(not(windows))]
fn fallback_data_dir() -> crate::Result<PathBuf> {
    Ok(home_dir()?.join(".local").join("share").join(crate::APP_NAME))
}

#[cfg(windows)]
fn fallback_data_dir() -> crate::Result<PathBuf> {
    dirs::cache_dir()
        .map(|dir| dir.join(crate::APP_NAME))
        .ok_or_else(|| {
            crate::Error::ValidationFailed("Cannot resolve the user cache directory".to_string())
        })
}

#[cfg(not(windows))]
fn home_dir() -> crate::Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| crate::Error::ValidationFailed("Cannot resolve ~ without HOME".to_string()))
}

/// Create `path` and any missing parents.
pub fn ensure_directory<P: AsRef<Path>>(path: P) -> crate::Result<()> {
    let path = path.as_ref();
    std::fs::create_dir_all(path).map_err(|source| crate::Error::DirectoryCreateFailed {
        path: path.to_path_buf(),
        source,
    })
}
