// Scripted fetcher for tests: canned bodies per symbol plus a call log.
use crate::fetcher::QuoteFetcher;
use crate::model::{FetchError, QuoteRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::time::Instant;

pub type CallLog = Arc<Mutex<Vec<(String, Instant)>>>;

#[derive(Default)]
pub struct ScriptedFetcher {
    responses: HashMap<String, Result<String, FetchError>>,
    calls: CallLog,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_body(mut self, symbol: &str, body: impl Into<String>) -> Self {
        self.responses.insert(symbol.to_string(), Ok(body.into()));
        self
    }

    pub fn with_error(mut self, symbol: &str, err: FetchError) -> Self {
        self.responses.insert(symbol.to_string(), Err(err));
        self
    }

    pub fn call_log(&self) -> CallLog {
        Arc::clone(&self.calls)
    }
}

#[async_trait::async_trait]
impl QuoteFetcher for ScriptedFetcher {
    async fn fetch_daily(&self, req: &QuoteRequest) -> Result<String, FetchError> {
        self.calls
            .lock()
            .unwrap()
            .push((req.symbol.clone(), Instant::now()));
        self.responses
            .get(&req.symbol)
            .cloned()
            .unwrap_or_else(|| Ok(r#"{ "Error Message": "Invalid API call." }"#.to_string()))
    }
}

/// Builds a provider body from closes on consecutive days starting 2024-01-01.
pub fn daily_body(closes: &[f64]) -> String {
    let start = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let rows: serde_json::Map<String, serde_json::Value> = closes
        .iter()
        .enumerate()
        .map(|(i, close)| {
            let date = start + chrono::Duration::days(i as i64);
            (
                date.format("%Y-%m-%d").to_string(),
                serde_json::json!({ "4. close": format!("{:.4}", close) }),
            )
        })
        .collect();
    serde_json::json!({ "Time Series (Daily)": rows }).to_string()
}
