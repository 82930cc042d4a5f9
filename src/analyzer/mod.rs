// Analyzer module: RSI indicator and the recommendation built on top of it.

pub mod indicators;
pub mod recommendation;
pub mod stock_analysis;

// Re-export the main Analyzer implementation for ease of use.
pub use stock_analysis::{Analyzer, RsiAnalyzer};
