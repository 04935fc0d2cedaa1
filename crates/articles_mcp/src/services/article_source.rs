use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use url::Url;

use crate::{
    errors::{ArticleServerError, ArticleServerResult},
    utils::{build_client, error_chain},
};

/// Where raw article records come from
///
/// Implementations return the undecoded records exactly as the upstream sent
/// them; schema validation happens in the service.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    async fn fetch_records(&self, endpoint: &Url) -> ArticleServerResult<Vec<Value>>;
}

/// Fetches the article list with a single GET and no retries
#[derive(Clone)]
pub struct HttpArticleSource {
    client: Client,
    timeout: Duration,
}

impl HttpArticleSource {
    pub fn new(timeout: Duration) -> ArticleServerResult<Self> {
        Ok(Self {
            client: build_client(timeout)?,
            timeout,
        })
    }

    fn unavailable(&self, endpoint: &Url, err: reqwest::Error) -> ArticleServerError {
        let cause = if err.is_timeout() {
            format!(
                "request to {} timed out after {}s",
                endpoint,
                self.timeout.as_secs_f64()
            )
        } else {
            error_chain(&err)
        };
        tracing::error!("Upstream request to {} failed: {}", endpoint, cause);
        ArticleServerError::UpstreamUnavailable { cause }
    }
}

#[async_trait]
impl ArticleSource for HttpArticleSource {
    async fn fetch_records(&self, endpoint: &Url) -> ArticleServerResult<Vec<Value>> {
        tracing::debug!("Fetching articles from {}", endpoint);

        let response = self
            .client
            .get(endpoint.clone())
            .send()
            .await
            .map_err(|e| self.unavailable(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Upstream {} answered with HTTP {}", endpoint, status);
            // Keep the status even when the body cannot be read
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => format!("<response body could not be read: {}>", error_chain(&e)),
            };
            return Err(ArticleServerError::UpstreamHttp {
                status: status.as_u16(),
                body,
            });
        }

        let payload = response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                ArticleServerError::DataShape {
                    message: format!("response body is not valid JSON: {}", error_chain(&e)),
                }
            } else {
                self.unavailable(endpoint, e)
            }
        })?;

        decode_records(payload)
    }
}

/// Unwrap a payload that must be a JSON array
pub fn decode_records(payload: Value) -> ArticleServerResult<Vec<Value>> {
    match payload {
        Value::Array(records) => Ok(records),
        other => Err(ArticleServerError::DataShape {
            message: format!(
                "expected a JSON array of articles, found {}",
                match other {
                    Value::Object(_) => "an object",
                    Value::String(_) => "a string",
                    Value::Number(_) => "a number",
                    Value::Bool(_) => "a boolean",
                    _ => "null",
                }
            ),
        }),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response on a throwaway local port
    pub(crate) async fn serve_once(status_line: &'static str, body: String) -> Url {
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        serve_raw(response).await
    }

    /// Write `response` verbatim to the first connection, then close it
    pub(crate) async fn serve_raw(response: String) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            read_request_head(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
        });

        Url::parse(&format!("http://{}/api/articles", addr)).unwrap()
    }

    async fn read_request_head(socket: &mut tokio::net::TcpStream) {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; 1024];
        while !buffer.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = socket.read(&mut chunk).await.unwrap();
            if read == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..read]);
        }
    }

    #[tokio::test]
    async fn test_fetches_json_array() {
        let url = serve_once("200 OK", r#"[{"id": 1}, {"id": 2}]"#.to_string()).await;
        let source = HttpArticleSource::new(Duration::from_secs(5)).unwrap();

        let records = source.fetch_records(&url).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["id"], 2);
    }

    #[tokio::test]
    async fn test_server_error_preserves_status_and_body() {
        let url = serve_once("500 Internal Server Error", "database is down".to_string()).await;
        let source = HttpArticleSource::new(Duration::from_secs(5)).unwrap();

        match source.fetch_records(&url).await {
            Err(ArticleServerError::UpstreamHttp { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "database is down");
            }
            other => panic!("expected UpstreamHttp, got {:?}", other.map(|r| r.len())),
        }
    }

    #[tokio::test]
    async fn test_timeout_is_unavailable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let url = Url::parse(&format!("http://{}/", addr)).unwrap();
        let source = HttpArticleSource::new(Duration::from_millis(200)).unwrap();

        let err = source.fetch_records(&url).await.unwrap_err();
        assert!(matches!(err, ArticleServerError::UpstreamUnavailable { .. }));
        assert!(err.to_string().contains("timed out"));
    }

    #[tokio::test]
    async fn test_refused_connection_is_unavailable() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = Url::parse(&format!("http://{}/", addr)).unwrap();
        let source = HttpArticleSource::new(Duration::from_secs(5)).unwrap();

        let err = source.fetch_records(&url).await.unwrap_err();
        assert!(matches!(err, ArticleServerError::UpstreamUnavailable { .. }));
    }

    #[tokio::test]
    async fn test_unreadable_error_body_keeps_status() {
        // Content-Length promises more bytes than are sent before the close
        let url = serve_raw(
            "HTTP/1.1 503 Service Unavailable\r\nContent-Length: 100\r\nConnection: close\r\n\r\npartial"
                .to_string(),
        )
        .await;
        let source = HttpArticleSource::new(Duration::from_secs(5)).unwrap();

        match source.fetch_records(&url).await {
            Err(ArticleServerError::UpstreamHttp { status, body }) => {
                assert_eq!(status, 503);
                assert!(body.contains("could not be read"));
            }
            other => panic!("expected UpstreamHttp, got {:?}", other.map(|r| r.len())),
        }
    }

    #[tokio::test]
    async fn test_invalid_json_body_is_data_shape() {
        let url = serve_once("200 OK", "<html>not json</html>".to_string()).await;
        let source = HttpArticleSource::new(Duration::from_secs(5)).unwrap();

        let err = source.fetch_records(&url).await.unwrap_err();
        assert!(matches!(err, ArticleServerError::DataShape { .. }));
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[tokio::test]
    async fn test_json_object_body_is_data_shape() {
        let url = serve_once("200 OK", r#"{"articles": []}"#.to_string()).await;
        let source = HttpArticleSource::new(Duration::from_secs(5)).unwrap();

        let err = source.fetch_records(&url).await.unwrap_err();
        assert!(matches!(err, ArticleServerError::DataShape { .. }));
        assert!(err.to_string().contains("an object"));
    }

    #[test]
    fn test_decode_rejects_non_arrays() {
        use serde_json::json;

        assert!(decode_records(json!([])).unwrap().is_empty());
        assert!(matches!(
            decode_records(json!("text")),
            Err(ArticleServerError::DataShape { .. })
        ));
        assert!(decode_records(Value::Null).unwrap_err().to_string().contains("null"));
    }
}
