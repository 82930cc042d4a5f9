use crate::analyzer::{Analyzer, RsiAnalyzer};
use crate::config::AppConfig;
use crate::fetcher::QuoteFetcher;
use crate::market_data::MarketDataService;
use crate::model::{AnalysisResult, TrackerError};
use tracing::info;

/// Per-run context: owns the symbol cache, the rate limiter and the analyzer.
pub struct StockTracker<F: QuoteFetcher> {
    market_data: MarketDataService<F>,
    analyzer: RsiAnalyzer,
}

impl<F: QuoteFetcher> StockTracker<F> {
    pub fn new(fetcher: F, config: &AppConfig) -> Self {
        Self {
            market_data: MarketDataService::new(
                fetcher,
                config.min_request_interval(),
                config.output_size.into(),
                config.cache_empty_results,
            ),
            analyzer: RsiAnalyzer::new(config.rsi_window),
        }
    }

    /// Fetches (or reuses) the series for `symbol` and runs the RSI analysis on it.
    pub async fn analyze_symbol(&mut self, symbol: &str) -> Result<AnalysisResult, TrackerError> {
        let series = self.market_data.fetch(symbol).await?;
        let result = self.analyzer.analyze(symbol, &series)?;
        info!(
            "{}: RSI({}) = {:.2} -> {}",
            symbol,
            self.analyzer.window(),
            result.rsi,
            result.recommendation
        );
        Ok(result)
    }
}
