use anyhow::Result;
use sailisi_probe::{api::SailisiClient, config, logging, probe};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    logging::init(&config.logs.level)?;

    info!("Starting quick probe against {}", config.api.base_url);

    let client = SailisiClient::new(config.api.clone());
    let report = probe::quick::run(&client).await;

    info!(
        "Quick probe finished (knowledge ok: {}, health ok: {})",
        report.knowledge_ok, report.health_ok
    );

    // Failures are reported in the output, never through the exit status.
    Ok(())
}
