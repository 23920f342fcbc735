use anyhow::Result;
use plantcare_smoke::{
    api::PlantCareClient,
    config,
    runner::{ALOE_VERA_QUESTIONS, SmokeRunner},
};
use tracing::info;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Determine log level: environment variable overrides config
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.logs.level.clone());

    // Validate log level
    if let Err(e) = validate_log_level(&log_level) {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    // Logs go to stderr; stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        "Smoke run against {} with log level: {}",
        config.backend.base_url, log_level
    );

    let client = PlantCareClient::new(&config.backend)?;
    let questions = ALOE_VERA_QUESTIONS.iter().map(|q| q.to_string()).collect();
    let runner = SmokeRunner::new(Box::new(client), questions);

    let summary = runner.run().await;

    if summary.aborted {
        info!("Run aborted early: backend unreachable");
    }
    info!(
        "Answered {}/{} questions",
        summary.answered(),
        summary.attempted()
    );

    Ok(())
}
