//! Logging setup using simplelog
//!
//! Always logs to stderr. With `log_to_file` enabled, a copy goes to a
//! timestamped file in the cache directory (~/.cache/flux-shops/ on Linux).

use anyhow::{Context, Result};
use flux_config::AppConfig;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;
use std::path::PathBuf;

/// Get the log file path in the cache directory
fn log_file_path() -> Result<PathBuf> {
    let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
    let filename = format!("debug-{}.log", timestamp);
    Ok(flux_config::paths::cache_dir()?.join(filename))
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// RUST_LOG wins over the configured level; unknown values fall back to info
pub(crate) fn resolve_level(env_value: Option<&str>, configured: &str) -> LevelFilter {
    env_value
        .and_then(parse_level)
        .or_else(|| parse_level(configured))
        .unwrap_or(LevelFilter::Info)
}

/// Initialize logging
///
/// Returns the path of the log file when file logging is enabled.
pub fn init(config: &AppConfig) -> Result<Option<PathBuf>> {
    let level = resolve_level(
        std::env::var("RUST_LOG").ok().as_deref(),
        &config.log_level,
    );

    // Configure simplelog with timestamps
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_time_offset_to_local()
        .unwrap_or_else(|c| c) // Fallback if local time offset fails
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        log_config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    let log_file = if config.log_to_file {
        let path = log_file_path()?;
        let file = File::create(&path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        loggers.push(WriteLogger::new(level, log_config, file));
        Some(path)
    } else {
        None
    };

    CombinedLogger::init(loggers).context("Failed to initialize logger")?;

    Ok(log_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_overrides_config() {
        assert_eq!(resolve_level(Some("trace"), "warn"), LevelFilter::Trace);
        assert_eq!(resolve_level(Some("DEBUG"), "warn"), LevelFilter::Debug);
    }

    #[test]
    fn test_config_level_without_env() {
        assert_eq!(resolve_level(None, "warn"), LevelFilter::Warn);
    }

    #[test]
    fn test_unknown_levels_fall_back_to_info() {
        assert_eq!(resolve_level(Some("loud"), "verbose"), LevelFilter::Info);
        assert_eq!(resolve_level(Some("loud"), "error"), LevelFilter::Error);
    }
}
