/// Remote rewrite service errors.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("API key is missing (set rewrite.api_key or OPENAI_API_KEY)")]
    ApiKeyMissing,

    #[error("network error: {reason}")]
    Network { reason: String },

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("API error: {message}")]
    Api { message: String },

    #[error("invalid response: {reason}")]
    InvalidResponse { reason: String },

    #[error("rewrite cancelled")]
    Cancelled,
}
