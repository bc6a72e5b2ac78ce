use async_trait::async_trait;

use crate::quotes::errors::QuoteError;
use crate::quotes::models::Quote;

/// Port for fetching a quote from the upstream market-data API.
///
/// Implemented by the Polygon client and by the Redis read-through cache
/// that decorates it. One fetch per call; retry and rate limiting are
/// deliberately not part of this contract.
#[async_trait]
pub trait QuoteGateway: Send + Sync + 'static {
    /// Fetch the latest quote for a symbol.
    ///
    /// # Errors
    /// * `Transport` - Network failure reaching the upstream
    /// * `UpstreamStatus` - Upstream answered with a non-success status
    /// * `MalformedBody` - Upstream body was not valid JSON
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, QuoteError>;
}
