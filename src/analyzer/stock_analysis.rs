use crate::analyzer::indicators::{MarketIndicators, DEFAULT_RSI_WINDOW};
use crate::analyzer::recommendation::{advice, classify};
use crate::companies::display_name;
use crate::model::{AnalysisError, AnalysisResult, PriceSeries};

/// Trait defining the interface for a price-series analyzer.
pub trait Analyzer {
    fn analyze(&self, symbol: &str, series: &PriceSeries) -> Result<AnalysisResult, AnalysisError>;
}

/// Recommends from the latest RSI over a fixed lookback window.
pub struct RsiAnalyzer {
    window: usize,
}

impl RsiAnalyzer {
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

impl Default for RsiAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_RSI_WINDOW)
    }
}

impl Analyzer for RsiAnalyzer {
    fn analyze(&self, symbol: &str, series: &PriceSeries) -> Result<AnalysisResult, AnalysisError> {
        // PriceSeries keeps its points in date order.
        let closes: Vec<f64> = series.points().iter().map(|p| p.close).collect();

        let insufficient = || AnalysisError::InsufficientData {
            required: self.window + 1,
            available: closes.len(),
        };
        let latest_close = *closes.last().ok_or_else(insufficient)?;
        let rsi = MarketIndicators::latest_rsi(&closes, self.window).ok_or_else(insufficient)?;

        let recommendation = classify(rsi);
        Ok(AnalysisResult {
            company_name: display_name(symbol).to_string(),
            symbol: symbol.to_string(),
            latest_close,
            rsi,
            recommendation,
            advice: advice(recommendation),
        })
    }
}
