use std::time::Duration;

use url::Url;

use crate::errors::{ArticleServerError, ArticleServerResult};

/// Environment variable holding the upstream article endpoint
pub const API_URL_ENV: &str = "ALAYMAN_API_URL";

/// Fixed timeout for the single upstream request
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration derived from CLI arguments and the environment
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: Option<String>,
    pub request_timeout: Duration,
}

impl Config {
    pub fn new(api_url: Option<String>) -> Self {
        Self {
            api_url,
            request_timeout: REQUEST_TIMEOUT,
        }
    }

    /// Resolve the upstream endpoint.
    ///
    /// The endpoint is checked on every call rather than at startup, so the
    /// server can be registered with a client before it is configured.
    pub fn endpoint(&self) -> ArticleServerResult<Url> {
        let raw = self
            .api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ArticleServerError::Configuration {
                message: format!("{} environment variable is not set", API_URL_ENV),
            })?;

        let url = Url::parse(raw).map_err(|e| ArticleServerError::Configuration {
            message: format!("{} is not a valid URL ({}): {}", API_URL_ENV, raw, e),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ArticleServerError::Configuration {
                message: format!("{} must use http or https, got {}", API_URL_ENV, scheme),
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
