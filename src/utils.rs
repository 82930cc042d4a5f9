// Utility functions
use chrono::NaiveDate;

pub const TRADING_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a provider date key (`YYYY-MM-DD`) into a `NaiveDate`, if possible.
pub fn parse_trading_date(date_str: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), TRADING_DATE_FORMAT).ok()
}

/// Parses a decimal price string, accepting only positive finite values.
pub fn parse_price(price_str: &str) -> Option<f64> {
    price_str
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
}
