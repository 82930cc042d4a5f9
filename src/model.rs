// Core structs: PriceSeries, AnalysisResult, error types
use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

/// Daily closes ordered by date, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Builds a series from points in any order. Later duplicates of a date are dropped.
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(|p| p.date);
        points.dedup_by_key(|p| p.date);
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSize {
    Compact,
    Full,
}

impl OutputSize {
    pub fn as_param(&self) -> &'static str {
        match self {
            OutputSize::Compact => "compact",
            OutputSize::Full => "full",
        }
    }
}

#[derive(Debug, Clone)]
pub struct QuoteRequest {
    pub symbol: String,
    pub output_size: OutputSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recommendation {
    Buy,
    Sell,
    Hold,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Recommendation::Buy => "BUY",
            Recommendation::Sell => "SELL",
            Recommendation::Hold => "HOLD",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub company_name: String,
    pub symbol: String,
    pub latest_close: f64,
    pub rsi: f64,
    pub recommendation: Recommendation,
    pub advice: &'static str,
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stock analysis result:")?;
        writeln!(f, "Company: {}", self.company_name)?;
        writeln!(f, "Symbol: {}", self.symbol)?;
        writeln!(f, "Latest close: ${:.2}", self.latest_close)?;
        writeln!(f, "RSI: {:.2}", self.rsi)?;
        writeln!(f, "Recommendation: {}", self.recommendation)?;
        write!(f, "Advice: {}", self.advice)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("no price data for symbol {symbol}")]
    NoData { symbol: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    #[error("invalid JSON payload: {0}")]
    InvalidJson(String),
    #[error("daily time series missing from payload")]
    MissingTimeSeries { provider_message: Option<String> },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("not enough data for RSI: need {required} closes, got {available}")]
    InsufficientData { required: usize, available: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl TrackerError {
    /// True for failures reported to the user as a diagnostic rather than a fault.
    pub fn is_diagnostic(&self) -> bool {
        matches!(
            self,
            TrackerError::Fetch(FetchError::NoData { .. })
                | TrackerError::Analysis(AnalysisError::InsufficientData { .. })
        )
    }
}
