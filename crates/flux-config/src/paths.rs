//! Configuration and cache directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/flux-shops/`, `~/.cache/flux-shops/`
//! - macOS: `~/Library/Application Support/flux-shops/`, `~/Library/Caches/flux-shops/`
//! - Windows: `%APPDATA%\flux-shops\`, `%LOCALAPPDATA%\flux-shops\`

use anyhow::{Context, Result};
use std::path::PathBuf;

pub const APP_NAME: &str = "flux-shops";

/// Get the application config directory, creating it if needed
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Get the application cache directory, creating it if needed
///
/// Log files end up here in release builds.
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    Ok(dir)
}

/// Get path to app config file inside the config directory
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_path_name() {
        if let Ok(path) = app_config_path() {
            assert!(path.ends_with("config.toml"));
            assert!(path.parent().is_some_and(|dir| dir.ends_with(APP_NAME)));
        }
    }

    #[test]
    fn test_cache_dir_exists() {
        if let Ok(dir) = cache_dir() {
            assert!(dir.exists());
            assert!(dir.ends_with(APP_NAME));
        }
    }
}
