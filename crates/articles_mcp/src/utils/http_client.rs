use crate::errors::{ArticleServerError, ArticleServerResult};
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build the reqwest client shared by every upstream call
pub fn build_client(timeout: Duration) -> ArticleServerResult<Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| ArticleServerError::Configuration {
            message: format!("failed to build HTTP client: {}", e),
        })
}

/// Render an error together with its source chain
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
