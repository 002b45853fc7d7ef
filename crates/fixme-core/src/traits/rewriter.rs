use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::errors::FixMeResult;
use crate::models::RewriteOptions;

/// A text rewrite service (grammar correction, translation, rephrasing).
pub trait IRewriter: Send + Sync {
    /// Rewrite `text`. Resolves to `RewriteError::Cancelled` once `cancel` fires.
    fn rewrite(
        &self,
        text: &str,
        options: RewriteOptions,
        cancel: &CancellationToken,
    ) -> impl Future<Output = FixMeResult<String>> + Send;

    /// Human-readable rewriter name for logging.
    fn name(&self) -> &str;
}
