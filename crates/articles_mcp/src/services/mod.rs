mod article_service;
pub(crate) mod article_source;
mod prompts;
mod validation;

pub use article_service::ArticleService;
pub use article_source::{ArticleSource, HttpArticleSource};
pub use prompts::list_articles_prompt;
pub use validation::Validate;
