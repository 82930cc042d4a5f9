// Alpha Vantage daily time-series parsing
use crate::model::{ParserError, PricePoint, PriceSeries};
use crate::utils::{parse_price, parse_trading_date};
use serde_json::Value;
use tracing::warn;

const SERIES_KEY: &str = "Time Series (Daily)";
const CLOSE_KEY: &str = "4. close";
const PROVIDER_MESSAGE_KEYS: [&str; 3] = ["Error Message", "Note", "Information"];

pub trait Parser {
    fn parse(&self, body: &str) -> Result<PriceSeries, ParserError>;
}

pub struct TimeSeriesParser;

impl TimeSeriesParser {
    pub fn new() -> Self {
        Self
    }

    fn provider_message(payload: &Value) -> Option<String> {
        PROVIDER_MESSAGE_KEYS
            .iter()
            .find_map(|key| payload.get(*key).and_then(Value::as_str))
            .map(str::to_string)
    }
}

impl Parser for TimeSeriesParser {
    /// Rows with an unreadable date or close are skipped; an empty object yields an empty series.
    fn parse(&self, body: &str) -> Result<PriceSeries, ParserError> {
        let payload: Value =
            serde_json::from_str(body).map_err(|e| ParserError::InvalidJson(e.to_string()))?;

        let rows = payload
            .get(SERIES_KEY)
            .and_then(Value::as_object)
            .ok_or_else(|| ParserError::MissingTimeSeries {
                provider_message: Self::provider_message(&payload),
            })?;

        let mut points = Vec::with_capacity(rows.len());
        for (date_key, row) in rows {
            let date = parse_trading_date(date_key);
            let close = row.get(CLOSE_KEY).and_then(Value::as_str).and_then(parse_price);

            match (date, close) {
                (Some(date), Some(close)) => points.push(PricePoint { date, close }),
                _ => warn!("Skipping malformed row for {}", date_key),
            }
        }

        Ok(PriceSeries::from_points(points))
    }
}
