use derive_getters::Getters;
use rmcp::schemars;
use serde::{Deserialize, Deserializer};

use crate::{errors::ArticleServerError, services::Validate};

pub(crate) mod article;
mod page;

pub use article::Article;
pub use page::ArticlePage;

pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 100;

fn default_limit() -> i64 {
    20
}

fn default_number() -> i64 {
    10
}

/// Prompt arguments travel as strings, so accept "5" as well as 5
fn deserialize_lenient_integer<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IntegerOrString {
        Integer(i64),
        String(String),
    }

    match IntegerOrString::deserialize(deserializer)? {
        IntegerOrString::Integer(value) => Ok(value),
        IntegerOrString::String(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected an integer, got '{}'", text))),
    }
}

/// Trim a string, treating an explicit null as empty
fn deserialize_optional_trimmed_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    Ok(s.map(|s| s.trim().to_string()).unwrap_or_default())
}

/// Parameters for retrieving a page of articles
#[derive(Debug, Deserialize, schemars::JsonSchema, Getters)]
pub struct GetArticlesRequest {
    /// Number of articles to return (default: 20, max: 100)
    #[serde(default = "default_limit")]
    #[schemars(range(min = 1, max = 100))]
    limit: i64,
    /// Number of articles to skip (default: 0)
    #[serde(default)]
    #[schemars(range(min = 0))]
    offset: i64,
}

impl GetArticlesRequest {
    pub fn new(limit: i64, offset: i64) -> Self {
        Self { limit, offset }
    }
}

impl Default for GetArticlesRequest {
    fn default() -> Self {
        Self::new(default_limit(), 0)
    }
}

impl Validate for GetArticlesRequest {
    fn validate(&self) -> Result<(), ArticleServerError> {
        if !(MIN_LIMIT..=MAX_LIMIT).contains(&self.limit) {
            return Err(ArticleServerError::InvalidInput {
                message: format!(
                    "limit must be between {} and {}, got {}",
                    MIN_LIMIT, MAX_LIMIT, self.limit
                ),
            });
        }

        if self.offset < 0 {
            return Err(ArticleServerError::InvalidInput {
                message: format!("offset must be 0 or greater, got {}", self.offset),
            });
        }

        Ok(())
    }
}

/// Arguments for the list_articles prompt
#[derive(Debug, Deserialize, schemars::JsonSchema, Getters)]
pub struct ListArticlesPromptArgs {
    /// Number of articles to list
    #[serde(
        default = "default_number",
        deserialize_with = "deserialize_lenient_integer"
    )]
    number: i64,
    /// Condition or filter for articles
    #[serde(default, deserialize_with = "deserialize_optional_trimmed_string")]
    condition: String,
}

impl Default for ListArticlesPromptArgs {
    fn default() -> Self {
        Self {
            number: default_number(),
            condition: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let request: GetArticlesRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(*request.limit(), 20);
        assert_eq!(*request.offset(), 0);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_limit_bounds() {
        for limit in [1, 50, 100] {
            assert!(GetArticlesRequest::new(limit, 0).validate().is_ok());
        }

        for limit in [0, 101, -3] {
            let err = GetArticlesRequest::new(limit, 0).validate().unwrap_err();
            assert!(matches!(err, ArticleServerError::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_negative_offset_rejected() {
        let request: GetArticlesRequest =
            serde_json::from_str(r#"{"limit": 5, "offset": -1}"#).unwrap();
        let err = request.validate().unwrap_err();
        assert!(err.to_string().contains("offset"));
    }

    #[test]
    fn test_prompt_args_accept_string_number() {
        let args: ListArticlesPromptArgs =
            serde_json::from_str(r#"{"number": "5", "condition": "  about Rust "}"#).unwrap();
        assert_eq!(*args.number(), 5);
        assert_eq!(args.condition(), "about Rust");

        let args: ListArticlesPromptArgs = serde_json::from_str(r#"{"number": 3}"#).unwrap();
        assert_eq!(*args.number(), 3);
        assert_eq!(args.condition(), "");

        let args: ListArticlesPromptArgs = serde_json::from_str("{}").unwrap();
        assert_eq!(*args.number(), 10);

        assert!(serde_json::from_str::<ListArticlesPromptArgs>(r#"{"number": "many"}"#).is_err());
    }

    #[test]
    fn test_prompt_args_null_condition_is_empty() {
        let args: ListArticlesPromptArgs =
            serde_json::from_str(r#"{"number": 4, "condition": null}"#).unwrap();
        assert_eq!(*args.number(), 4);
        assert_eq!(args.condition(), "");
    }
}
