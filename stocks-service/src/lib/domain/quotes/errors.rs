use thiserror::Error;

/// Error type for quote fetches.
///
/// Upstream failures are normalized here with the original cause kept for
/// logging; no raw transport error escapes to callers, and no variant is
/// exposed in the user-visible response.
#[derive(Debug, Clone, Error)]
pub enum QuoteError {
    #[error("Upstream request failed: {0}")]
    Transport(String),

    #[error("Upstream returned status {0}")]
    UpstreamStatus(u16),

    #[error("Upstream returned malformed body: {0}")]
    MalformedBody(String),

    #[error("Quote cache error: {0}")]
    Cache(String),
}
