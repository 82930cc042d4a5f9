pub mod time_series;

pub use time_series::TimeSeriesParser;
