mod actions;
mod domain_models;
mod lessons;
mod logger;
mod reducers;
mod selectors;
mod services;
mod state;
mod thunks;

use flux_config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    let (config, config_warning) = AppConfig::load();
    let log_file = logger::init(&config)?;

    log::info!("Starting flux-shops");
    if let Some(warning) = config_warning {
        log::warn!("{}; using defaults", warning);
    }
    if let Some(path) = &log_file {
        log::info!("Writing log file to {}", path.display());
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    for lesson in lessons::select(&args, &config.lessons)? {
        lesson.run(&config).await?;
    }

    log::info!("Exiting flux-shops");
    Ok(())
}
