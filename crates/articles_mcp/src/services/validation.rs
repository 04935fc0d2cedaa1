use crate::errors::ArticleServerResult;

/// Checks run on caller-supplied parameters before any work is done
pub trait Validate {
    fn validate(&self) -> ArticleServerResult<()>;
}
