/// Display names for well-known tickers.
const COMPANY_NAMES: &[(&str, &str)] = &[
    ("AAPL", "Apple Inc."),
    ("TSLA", "Tesla Inc."),
    ("MSFT", "Microsoft Corporation"),
    ("GOOGL", "Alphabet Inc."),
    ("AMZN", "Amazon.com Inc."),
    ("NFLX", "Netflix Inc."),
    ("NVDA", "NVIDIA Corporation"),
    ("META", "Meta Platforms Inc."),
];

/// Resolves a symbol to its company name; unknown symbols come back unchanged.
pub fn display_name(symbol: &str) -> &str {
    COMPANY_NAMES
        .iter()
        .find(|(ticker, _)| *ticker == symbol)
        .map(|(_, name)| *name)
        .unwrap_or(symbol)
}
