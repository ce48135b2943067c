use crate::{Error, Result};

/// Validates that a log level string is valid
pub fn validate_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            Error::config(format!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            ))
        })?;
    Ok(())
}

/// Initializes tracing with the configured level; `RUST_LOG` overrides it.
pub fn init(default_level: &str) -> Result<()> {
    let level = std::env::var("RUST_LOG").unwrap_or_else(|_| default_level.to_string());

    validate_level(&level)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| level.parse().unwrap()),
        )
        .init();

    Ok(())
}
