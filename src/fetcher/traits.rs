use crate::model::{FetchError, QuoteRequest};

/// Source of raw daily-history payloads.
#[async_trait::async_trait]
pub trait QuoteFetcher: Send + Sync {
    async fn fetch_daily(&self, req: &QuoteRequest) -> Result<String, FetchError>;
}
