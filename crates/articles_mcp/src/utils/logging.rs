use tracing_subscriber::{EnvFilter, prelude::*};

use crate::errors::{ArticleServerError, ArticleServerResult};

/// Environment variable that switches logging on
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

/// Initialize logging only if `LOG_LEVEL` is set
///
/// Stdout carries the MCP stdio transport, so log lines go to stderr without
/// ANSI colors. `RUST_LOG` directives win over `LOG_LEVEL` when both are set.
pub fn init_logging() -> ArticleServerResult<()> {
    let Ok(log_level) = std::env::var(LOG_LEVEL_ENV) else {
        return Ok(());
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(env_filter)
        .try_init()
        .map_err(|e| ArticleServerError::LoggingInitialization(e.to_string()))?;

    tracing::info!("Starting Articles MCP server with log level: {}", log_level);
    Ok(())
}
