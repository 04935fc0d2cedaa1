use rmcp::schemars;
use serde::Serialize;

use super::Article;

/// Response model for paginated articles
#[derive(Debug, Clone, PartialEq, Serialize, schemars::JsonSchema)]
pub struct ArticlePage {
    pub articles: Vec<Article>,
    /// Number of articles available upstream
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    /// Whether more articles remain after this page
    pub has_more: bool,
}

impl ArticlePage {
    /// Slice a fully validated list, keeping upstream order.
    pub fn paginate(all_articles: Vec<Article>, offset: usize, limit: usize) -> Self {
        let total = all_articles.len();
        let articles = all_articles.into_iter().skip(offset).take(limit).collect();

        Self {
            articles,
            total,
            offset,
            limit,
            has_more: offset.saturating_add(limit) < total,
        }
    }
}
