use crate::model::Recommendation;

pub const OVERSOLD_THRESHOLD: f64 = 30.0;
pub const OVERBOUGHT_THRESHOLD: f64 = 70.0;

const BUY_ADVICE: &str = "The stock looks undervalued based on RSI. Consider buying, but also check fundamentals such as earnings and market trends.";
const SELL_ADVICE: &str = "RSI shows the stock is overbought. This may be a good time to take profit, but also look at other factors such as upcoming news.";
const HOLD_ADVICE: &str = "The stock is in a neutral zone. Consider waiting for a better entry point, or selling if fundamentals point to a decline.";

/// Strict thresholds: exactly 30 or 70 is a hold.
pub fn classify(rsi: f64) -> Recommendation {
    if rsi < OVERSOLD_THRESHOLD {
        Recommendation::Buy
    } else if rsi > OVERBOUGHT_THRESHOLD {
        Recommendation::Sell
    } else {
        Recommendation::Hold
    }
}

pub fn advice(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::Buy => BUY_ADVICE,
        Recommendation::Sell => SELL_ADVICE,
        Recommendation::Hold => HOLD_ADVICE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds() {
        assert_eq!(classify(12.5), Recommendation::Buy);
        assert_eq!(classify(29.999), Recommendation::Buy);
        assert_eq!(classify(30.0), Recommendation::Hold);
        assert_eq!(classify(55.0), Recommendation::Hold);
        assert_eq!(classify(70.0), Recommendation::Hold);
        assert_eq!(classify(70.001), Recommendation::Sell);
    }

    #[test]
    fn each_recommendation_has_distinct_advice() {
        assert_ne!(advice(Recommendation::Buy), advice(Recommendation::Sell));
        assert_ne!(advice(Recommendation::Sell), advice(Recommendation::Hold));
        assert!(advice(Recommendation::Buy).contains("undervalued"));
    }
}
