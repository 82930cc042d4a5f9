mod analyzer;
mod companies;
mod config;
mod fetcher;
mod market_data;
mod model;
mod parser;
mod tracker;
mod utils;

use config::{load_config, API_KEY_ENV, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use fetcher::AlphaVantageFetcher;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracker::StockTracker;
use tracing::{error, info, warn};

const PROMPT: &str = "Enter a stock symbol (e.g. AAPL, TSLA) or 'exit' to quit: ";
const NO_DATA_MESSAGE: &str = "No data found. Check the symbol and try again.";

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config_path =
        std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = match load_config(&config_path, std::env::var(API_KEY_ENV).ok()) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error: {}", e);
            return;
        }
    };

    let fetcher = match AlphaVantageFetcher::new(
        config.base_url.clone(),
        config.api_key.clone(),
        config.request_timeout(),
    ) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to create HTTP client: {}", e);
            return;
        }
    };

    let mut tracker = StockTracker::new(fetcher, &config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    info!("Stock tracker ready (RSI window {})", config.rsi_window);
    loop {
        print!("{}", PROMPT);
        if let Err(e) = std::io::stdout().flush() {
            warn!("Failed to flush prompt: {}", e);
        }

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        let symbol = line.trim();
        if symbol.is_empty() {
            continue;
        }
        if symbol.eq_ignore_ascii_case("exit") {
            break;
        }

        match tracker.analyze_symbol(symbol).await {
            Ok(result) => println!("\n{}\n", result),
            Err(e) if e.is_diagnostic() => {
                if matches!(e, model::TrackerError::Fetch(_)) {
                    println!("{}", NO_DATA_MESSAGE);
                } else {
                    println!("{}", e);
                }
            }
            Err(e) => {
                warn!("Analysis of {} failed: {}", symbol, e);
                println!("Could not analyze {}: {}", symbol, e);
            }
        }
    }

    info!("Exiting.");
}
