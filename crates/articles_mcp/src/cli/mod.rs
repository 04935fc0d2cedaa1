use clap::Parser;

use crate::config::{API_URL_ENV, Config};

/// Articles MCP Server
///
/// Exposes a blog's article feed to MCP clients as a paginated tool, plus a
/// prompt that tells the model how to list articles.
///
/// ## Development
/// ```bash
/// npx @modelcontextprotocol/inspector cargo run --bin mcp-server-articles
/// ```
///
/// ## Configuration
/// Add to your MCP client configuration:
/// ```json
/// {
///   "mcpServers": {
///     "articles": {
///       "command": "mcp-server-articles",
///       "env": {
///         "ALAYMAN_API_URL": "https://example.com/api/articles",
///         "LOG_LEVEL": "info"
///       }
///     }
///   }
/// }
/// ```
///
/// ## Environment Variables
/// - `ALAYMAN_API_URL`: Upstream article endpoint (also read from `.env`)
/// - `LOG_LEVEL`: Enables logging to stderr at the given level
/// - `RUST_LOG`: Fine-grained filter directives, overriding `LOG_LEVEL`
#[derive(Parser, Debug, Clone)]
#[command(name = "mcp-server-articles")]
#[command(about = "MCP server exposing a blog's article feed with pagination")]
#[command(version)]
pub struct Cli {
    /// Upstream article endpoint returning a JSON array of articles.
    ///
    /// May be left unset at startup; calls to get_articles fail with a
    /// configuration error until it is provided.
    #[arg(long, env = API_URL_ENV, value_name = "URL")]
    pub api_url: Option<String>,
}

impl Cli {
    /// Parse CLI arguments and convert to configuration
    pub fn parse_config() -> Config {
        let cli = Self::parse();
        Config::new(cli.api_url)
    }
}
