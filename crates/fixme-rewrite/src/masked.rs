//! Mask → rewrite → unmask.

use fixme_core::errors::FixMeResult;
use fixme_core::models::RewriteOptions;
use fixme_core::traits::{IMasker, IRewriter};
use fixme_mask::UrlMasker;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Wraps a rewriter so that URLs are replaced by placeholders before the
/// text leaves the process and restored in whatever comes back.
#[derive(Debug, Clone)]
pub struct MaskedRewriter<R, M = UrlMasker> {
    inner: R,
    masker: M,
}

impl<R: IRewriter> MaskedRewriter<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            masker: UrlMasker::new(),
        }
    }
}

impl<R: IRewriter, M: IMasker> MaskedRewriter<R, M> {
    pub fn with_masker(inner: R, masker: M) -> Self {
        Self { inner, masker }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<R: IRewriter, M: IMasker> IRewriter for MaskedRewriter<R, M> {
    async fn rewrite(
        &self,
        text: &str,
        options: RewriteOptions,
        cancel: &CancellationToken,
    ) -> FixMeResult<String> {
        let masked = self.masker.mask(text);
        if !masked.placeholders.is_empty() {
            debug!(urls = masked.masked_count(), "masked URLs before rewrite");
        }
        let rewritten = self.inner.rewrite(&masked.text, options, cancel).await?;
        Ok(self.masker.unmask(&rewritten, &masked.placeholders))
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
