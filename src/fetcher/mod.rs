pub mod alpha_vantage;
pub mod traits;

pub use alpha_vantage::AlphaVantageFetcher;
pub use traits::QuoteFetcher;

#[cfg(test)]
pub mod testing;
