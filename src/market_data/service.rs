use crate::companies::display_name;
use crate::fetcher::QuoteFetcher;
use crate::market_data::RateLimiter;
use crate::model::{FetchError, OutputSize, ParserError, PriceSeries, QuoteRequest};
use crate::parser::time_series::Parser;
use crate::parser::TimeSeriesParser;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Resolves symbols to daily price series.
///
/// The first result for a symbol is kept for the whole run and never refreshed.
/// Live calls go through a process-wide [`RateLimiter`]. Transport failures are
/// not cached; empty results are, unless `cache_empty_results` is off.
pub struct MarketDataService<F: QuoteFetcher> {
    fetcher: F,
    parser: TimeSeriesParser,
    rate_limiter: RateLimiter,
    cache: HashMap<String, Arc<PriceSeries>>,
    output_size: OutputSize,
    cache_empty_results: bool,
}

impl<F: QuoteFetcher> MarketDataService<F> {
    pub fn new(
        fetcher: F,
        min_interval: Duration,
        output_size: OutputSize,
        cache_empty_results: bool,
    ) -> Self {
        Self {
            fetcher,
            parser: TimeSeriesParser::new(),
            rate_limiter: RateLimiter::new(min_interval),
            cache: HashMap::new(),
            output_size,
            cache_empty_results,
        }
    }

    /// Transport failures are not cached, so a later request for the same symbol calls out again.
    pub async fn fetch(&mut self, symbol: &str) -> Result<Arc<PriceSeries>, FetchError> {
        if let Some(series) = self.cache.get(symbol) {
            info!(
                "Using cached data for {} ({}) to save API calls",
                symbol,
                display_name(symbol)
            );
            return Self::non_empty(symbol, Arc::clone(series));
        }

        self.rate_limiter.wait_turn().await;

        let request = QuoteRequest {
            symbol: symbol.to_string(),
            output_size: self.output_size,
        };
        let response = self.fetcher.fetch_daily(&request).await;
        self.rate_limiter.mark_call();

        let body = match response {
            Ok(body) => body,
            Err(e) => {
                warn!("Fetch for {} failed: {}", symbol, e);
                return Err(e);
            }
        };

        let series = match self.parser.parse(&body) {
            Ok(series) => series,
            Err(ParserError::MissingTimeSeries { provider_message }) => {
                match provider_message {
                    Some(msg) => warn!("No daily series for {}: provider says {:?}", symbol, msg),
                    None => warn!("No daily series for {} in provider payload", symbol),
                }
                PriceSeries::empty()
            }
            Err(e) => {
                warn!("Unreadable payload for {}: {}", symbol, e);
                PriceSeries::empty()
            }
        };
        if !series.is_empty() {
            info!("Fetched {} daily closes for {}", series.len(), symbol);
        }

        let series = Arc::new(series);
        if !series.is_empty() || self.cache_empty_results {
            self.cache.insert(symbol.to_string(), Arc::clone(&series));
        }

        Self::non_empty(symbol, series)
    }

    #[cfg(test)]
    pub fn is_cached(&self, symbol: &str) -> bool {
        self.cache.contains_key(symbol)
    }

    #[cfg(test)]
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    fn non_empty(symbol: &str, series: Arc<PriceSeries>) -> Result<Arc<PriceSeries>, FetchError> {
        if series.is_empty() {
            return Err(FetchError::NoData {
                symbol: symbol.to_string(),
            });
        }
        Ok(series)
    }
}
