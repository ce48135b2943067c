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

    info!("Starting connection probe against {}", config.api.base_url);

    let client = SailisiClient::new(config.api.clone());
    let ok = probe::connection::run(&client).await;

    println!("{}", "=".repeat(40));
    println!("🎯 result: {}", if ok { "success" } else { "failure" });

    // Failures are reported in the output, never through the exit status.
    Ok(())
}
