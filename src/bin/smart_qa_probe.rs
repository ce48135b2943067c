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

    info!("Starting smart QA probe against {}", config.api.base_url);

    let client = SailisiClient::new(config.api.clone()).with_ask_timeout(config.api.qa_timeout());
    let report = probe::smart_qa::run(&client).await;

    println!("\n{}", "=".repeat(50));
    if report.health_ok {
        println!(
            "🎯 probe finished: {} answered, {} failed",
            report.answered, report.failed
        );
    } else {
        println!("🎯 probe aborted: service is not healthy");
    }

    // Failures are reported in the output, never through the exit status.
    Ok(())
}
