/// Added to the average loss so a window without losses does not divide by zero.
pub const RSI_EPSILON: f64 = 1e-10;
pub const DEFAULT_RSI_WINDOW: usize = 14;

pub struct MarketIndicators;

impl MarketIndicators {
    /// Simple moving average over every fully covered window.
    pub fn moving_average(data: &[f64], window_size: usize) -> Vec<f64> {
        if window_size == 0 || data.len() < window_size {
            return Vec::new();
        }
        data.windows(window_size)
            .map(|window| window.iter().sum::<f64>() / window_size as f64)
            .collect()
    }

    /// Splits successive price changes into (gains, losses), both non-negative.
    pub fn gains_and_losses(prices: &[f64]) -> (Vec<f64>, Vec<f64>) {
        prices
            .windows(2)
            .map(|w| {
                let delta = w[1] - w[0];
                (delta.max(0.0), (-delta).max(0.0))
            })
            .unzip()
    }

    /// RSI for each trailing window of `window` price changes, oldest first.
    ///
    /// Uses simple (not Wilder-smoothed) averages. Yields `prices.len() - window`
    /// values, or none when there are fewer than `window + 1` prices.
    pub fn rsi_series(prices: &[f64], window: usize) -> Vec<f64> {
        let (gains, losses) = Self::gains_and_losses(prices);
        let avg_gain = Self::moving_average(&gains, window);
        let avg_loss = Self::moving_average(&losses, window);

        avg_gain
            .iter()
            .zip(avg_loss.iter())
            .map(|(gain, loss)| {
                let rs = gain / (loss + RSI_EPSILON);
                100.0 - 100.0 / (1.0 + rs)
            })
            .collect()
    }

    /// Most recent RSI value, if the series is long enough.
    pub fn latest_rsi(prices: &[f64], window: usize) -> Option<f64> {
        Self::rsi_series(prices, window).last().copied()
    }
}
