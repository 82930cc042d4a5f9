use crate::fetcher::QuoteFetcher;
use crate::model::{FetchError, QuoteRequest};

use reqwest::Client;
use std::time::Duration;
use tracing::{info, warn};

const DAILY_FUNCTION: &str = "TIME_SERIES_DAILY";

pub struct AlphaVantageFetcher {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AlphaVantageFetcher {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent("stock-rsi-tracker/0.1")
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(Self { client, base_url, api_key })
    }

    fn query_params<'a>(&'a self, req: &'a QuoteRequest) -> [(&'static str, &'a str); 4] {
        [
            ("function", DAILY_FUNCTION),
            ("symbol", req.symbol.as_str()),
            ("apikey", self.api_key.as_str()),
            ("outputsize", req.output_size.as_param()),
        ]
    }
}

#[async_trait::async_trait]
impl QuoteFetcher for AlphaVantageFetcher {
    async fn fetch_daily(&self, req: &QuoteRequest) -> Result<String, FetchError> {
        info!("Requesting daily series for {} ({})", req.symbol, req.output_size.as_param());

        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query_params(req))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!("Quote provider responded [{}] for {}", status, req.symbol);
            return Err(FetchError::Transport(format!("HTTP status {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.without_url().to_string()))
    }
}
