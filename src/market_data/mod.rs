// Market data module: cached, rate-limited acquisition of daily price series.

pub mod rate_limiter;
pub mod service;

pub use rate_limiter::RateLimiter;
pub use service::MarketDataService;
