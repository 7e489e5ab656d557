use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".flux-shops.toml";

/// Environment variable pointing at an explicit config file
pub const CONFIG_ENV: &str = "FLUX_SHOPS_CONFIG";

/// Candidate config file locations, most specific first
///
/// 1. `$FLUX_SHOPS_CONFIG`
/// 2. `.flux-shops.toml` in the current directory
/// 3. `~/.flux-shops.toml`
/// 4. `config.toml` in the platform config directory
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(explicit) = env::var_os(CONFIG_ENV) {
        candidates.push(PathBuf::from(explicit));
    }
    candidates.push(PathBuf::from(CONFIG_FILE));
    if let Some(home) = get_home_config_path() {
        candidates.push(home);
    }
    if let Ok(path) = crate::paths::app_config_path() {
        candidates.push(path);
    }
    candidates
}

/// Load config file content from the first candidate that exists
///
/// Returns the path and the file content if found, None otherwise.
pub fn load_config_file() -> Option<(PathBuf, String)> {
    config_candidates().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some((path, content))
    })
}

/// Get the path to the config file in the home directory
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_file_comes_before_home() {
        let candidates = config_candidates();
        let local = candidates
            .iter()
            .position(|path| path == &PathBuf::from(CONFIG_FILE));
        let home = get_home_config_path()
            .and_then(|home| candidates.iter().position(|path| *path == home));
        assert!(local.is_some());
        if let (Some(local), Some(home)) = (local, home) {
            assert!(local < home);
        }
    }
}
