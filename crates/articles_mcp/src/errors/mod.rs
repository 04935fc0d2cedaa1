use rmcp::ErrorData as McpError;
use serde_json::json;

/// Custom error types for better error handling
#[derive(Debug, thiserror::Error)]
pub enum ArticleServerError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    #[error("Invalid parameters: {message}")]
    InvalidInput { message: String },
    #[error("Upstream returned malformed article data: {message}")]
    DataShape { message: String },
    #[error("HTTP error occurred: {status} - {body}")]
    UpstreamHttp { status: u16, body: String },
    #[error("Request error occurred: {cause}")]
    UpstreamUnavailable { cause: String },
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

// Error codes
const ERROR_CONFIGURATION: &str = "configuration_error";
const ERROR_INVALID_PARAMS: &str = "invalid_params";
const ERROR_DATA_SHAPE: &str = "data_shape_error";
const ERROR_UPSTREAM_HTTP: &str = "upstream_http_error";
const ERROR_UPSTREAM_UNAVAILABLE: &str = "upstream_unavailable";
const ERROR_LOGGING: &str = "logging_error";

impl From<ArticleServerError> for McpError {
    fn from(err: ArticleServerError) -> Self {
        let message = err.to_string();
        match err {
            ArticleServerError::Configuration { message: detail } => McpError::internal_error(
                message,
                Some(json!({ "code": ERROR_CONFIGURATION, "message": detail })),
            ),
            ArticleServerError::InvalidInput { message: detail } => McpError::invalid_params(
                message,
                Some(json!({ "code": ERROR_INVALID_PARAMS, "message": detail })),
            ),
            ArticleServerError::DataShape { message: detail } => McpError::internal_error(
                message,
                Some(json!({ "code": ERROR_DATA_SHAPE, "message": detail })),
            ),
            ArticleServerError::UpstreamHttp { status, body } => McpError::internal_error(
                message,
                Some(json!({ "code": ERROR_UPSTREAM_HTTP, "status": status, "body": body })),
            ),
            ArticleServerError::UpstreamUnavailable { cause } => McpError::internal_error(
                message,
                Some(json!({ "code": ERROR_UPSTREAM_UNAVAILABLE, "cause": cause })),
            ),
            ArticleServerError::LoggingInitialization(detail) => McpError::internal_error(
                message,
                Some(json!({ "code": ERROR_LOGGING, "message": detail })),
            ),
        }
    }
}

pub type ArticleServerResult<T> = Result<T, ArticleServerError>;
pub type McpResult<T> = Result<T, McpError>;
