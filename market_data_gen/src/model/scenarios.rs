//! Hardcoded quote scenarios the generator stamps fixtures from.
//!
//! Each scenario is a price/quantity template for one ticker symbol. The
//! values are fixed; only the capture timestamp varies between runs. The first
//! scenario doubles as the "default" fixture written to `market_data.json`.

use sim_common::Symbol;

/// Price/quantity template for one ticker symbol.
#[derive(Debug, Clone, Copy)]
pub struct QuoteScenario {
    /// Ticker symbol this scenario describes.
    pub symbol: Symbol,
    /// Best bid price.
    pub bid_price: f64,
    /// Best ask price.
    pub ask_price: f64,
    /// Quantity available at the bid.
    pub bid_qty: u32,
    /// Quantity available at the ask.
    pub ask_qty: u32,
    /// Quoted bid/ask spread.
    pub spread: f64,
}

/// The fixed scenario list. The first entry (SPY) is the default fixture.
pub fn default_scenarios() -> Vec<QuoteScenario> {
    vec![
        QuoteScenario {
            symbol: Symbol::SPY,
            bid_price: 500.00,
            ask_price: 500.01,
            bid_qty: 20000,
            ask_qty: 15000,
            spread: 0.01,
        },
        QuoteScenario {
            symbol: Symbol::QQQ,
            bid_price: 349.50,
            ask_price: 349.55,
            bid_qty: 5000,
            ask_qty: 4500,
            spread: 0.05,
        },
        QuoteScenario {
            symbol: Symbol::IWM,
            bid_price: 199.98,
            ask_price: 200.01,
            bid_qty: 3000,
            ask_qty: 2800,
            spread: 0.03,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spy_is_the_default_scenario() {
        let scenarios = default_scenarios();
        assert_eq!(scenarios.len(), 3);
        assert_eq!(scenarios[0].symbol, Symbol::SPY);
    }

    #[test]
    fn spreads_match_quoted_prices() {
        for scenario in default_scenarios() {
            let implied = scenario.ask_price - scenario.bid_price;
            assert!(
                (implied - scenario.spread).abs() < 1e-9,
                "{}: spread {} does not match ask-bid {}",
                scenario.symbol,
                scenario.spread,
                implied
            );
        }
    }
}
