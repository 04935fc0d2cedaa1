use std::sync::Arc;

use serde_json::Value;

use crate::{
    config::Config,
    errors::{ArticleServerError, ArticleServerResult},
    models::{Article, ArticlePage, GetArticlesRequest},
    services::{ArticleSource, HttpArticleSource, Validate},
};

/// Fetches, validates and paginates the upstream article list
///
/// Nothing is cached: every call re-fetches and re-validates the full list.
#[derive(Clone)]
pub struct ArticleService {
    config: Config,
    source: Arc<dyn ArticleSource>,
}

impl ArticleService {
    pub fn new(config: Config) -> ArticleServerResult<Self> {
        let source = HttpArticleSource::new(config.request_timeout)?;
        Ok(Self::with_source(config, Arc::new(source)))
    }

    pub fn with_source(config: Config, source: Arc<dyn ArticleSource>) -> Self {
        Self { config, source }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn get_articles(&self, request: &GetArticlesRequest) -> ArticleServerResult<ArticlePage> {
        request.validate()?;
        let endpoint = self.config.endpoint()?;

        let records = self.source.fetch_records(&endpoint).await?;
        let articles = validate_records(&records)?;
        tracing::debug!("Validated {} articles from {}", articles.len(), endpoint);

        // validate() guarantees both values are non-negative
        let offset = usize::try_from(*request.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(*request.limit()).unwrap_or_default();

        Ok(ArticlePage::paginate(articles, offset, limit))
    }
}

/// All-or-nothing: the first invalid record fails the whole list
pub fn validate_records(records: &[Value]) -> ArticleServerResult<Vec<Article>> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            Article::from_value(record).map_err(|e| {
                tracing::warn!("Rejected upstream article at index {}: {}", index, e);
                ArticleServerError::DataShape {
                    message: format!("article at index {}: {}", index, e),
                }
            })
        })
        .collect()
}
