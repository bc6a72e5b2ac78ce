use async_trait::async_trait;
use serde::de::IgnoredAny;

use crate::quotes::errors::QuoteError;
use crate::quotes::models::Quote;
use crate::quotes::ports::QuoteGateway;

const DEFAULT_BASE_URL: &str = "https://api.polygon.io";

/// Quote client for the Polygon.io last-trade endpoint.
///
/// Performs a single GET per fetch and hands the response body back byte for
/// byte. The API key travels as a query parameter and is never logged.
pub struct PolygonQuoteClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl PolygonQuoteClient {
    pub fn new(api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Point the client at a different upstream, e.g. a local stub.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn trade_url(&self, symbol: &str) -> String {
        format!("{}/v2/last/trade/{}", self.base_url, symbol)
    }
}

#[async_trait]
impl QuoteGateway for PolygonQuoteClient {
    async fn fetch_quote(&self, symbol: &str) -> Result<Quote, QuoteError> {
        tracing::debug!(symbol, "Fetching quote from upstream");

        let response = self
            .http
            .get(self.trade_url(symbol))
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(QuoteError::UpstreamStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| QuoteError::Transport(e.to_string()))?;

        // Validate without building a tree: the original bytes are the
        // payload, not a re-serialization of them.
        serde_json::from_slice::<IgnoredAny>(&body)
            .map_err(|e| QuoteError::MalformedBody(e.to_string()))?;

        Ok(Quote::new(symbol, body.to_vec()))
    }
}
