//! Span definitions per operation: tick, classify, rewrite.

/// Create a span around one clipboard poll.
#[macro_export]
macro_rules! tick_span {
    () => {
        tracing::debug_span!("fixme.tick")
    };
}

/// Create a classification span.
#[macro_export]
macro_rules! classify_span {
    ($chars:expr) => {
        tracing::debug_span!("fixme.classify", chars = $chars)
    };
}

/// Create a rewrite span.
#[macro_export]
macro_rules! rewrite_span {
    ($rewriter:expr, $chars:expr) => {
        tracing::info_span!("fixme.rewrite", rewriter = %$rewriter, chars = $chars)
    };
}
