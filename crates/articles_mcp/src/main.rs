mod cli;
mod config;
mod errors;
mod models;
mod server;
mod services;
mod utils;

use cli::Cli;
use utils::logging;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; real environment variables still apply
    let dotenv_path = dotenvy::dotenv().ok();

    logging::init_logging()?;

    if let Some(path) = dotenv_path {
        tracing::info!("Loaded environment from {}", path.display());
    }

    let config = Cli::parse_config();

    match config.api_url.as_deref() {
        Some(url) => tracing::info!("Using article endpoint: {}", url),
        None => tracing::warn!(
            "{} is not set; get_articles will fail until it is configured",
            config::API_URL_ENV
        ),
    }

    // Run the MCP server
    if let Err(e) = server::run(config).await {
        tracing::error!("Failed to run MCP server: {}", e);
        return Err(e);
    }

    Ok(())
}
