//! Market quote fixture record and JSON encoding helpers.
//!
//! A `MarketQuote` is the payload written to each fixture file. It contains the
//! ticker symbol, bid/ask prices and quantities, the quoted spread, and a
//! capture timestamp in fractional seconds since the Unix epoch. The field set
//! and their names are part of the contract with the simulation that reads the
//! files, so they must not be renamed or reordered casually.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sim_common::Symbol;
use sim_common::ToolError;

use crate::model::scenarios::QuoteScenario;

/// Market quote fixture for a single ticker symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketQuote {
    /// Capture time in fractional seconds since the Unix epoch.
    pub timestamp: f64,
    /// Ticker symbol the quote belongs to.
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

impl MarketQuote {
    /// Stamp a quote from a scenario template, capturing the current time.
    ///
    /// Every call produces a fresh timestamp; all other fields are copied
    /// verbatim from the scenario.
    pub fn from_scenario(scenario: &QuoteScenario) -> MarketQuote {
        MarketQuote {
            timestamp: Utc::now().timestamp_micros() as f64 / 1_000_000.0,
            symbol: scenario.symbol,
            bid_price: scenario.bid_price,
            ask_price: scenario.ask_price,
            bid_qty: scenario.bid_qty,
            ask_qty: scenario.ask_qty,
            spread: scenario.spread,
        }
    }

    /// Encode the quote to pretty-printed JSON bytes (two-space indent).
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, ToolError> {
        let json = serde_json::to_vec_pretty(self)?;
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::scenarios::default_scenarios;
    use serde_json::Value;

    #[test]
    fn from_scenario_copies_template_fields() {
        let scenarios = default_scenarios();
        let quote = MarketQuote::from_scenario(&scenarios[0]);
        assert_eq!(quote.symbol, Symbol::SPY);
        assert_eq!(quote.bid_price, 500.00);
        assert_eq!(quote.ask_price, 500.01);
        assert_eq!(quote.bid_qty, 20000);
        assert_eq!(quote.ask_qty, 15000);
        assert_eq!(quote.spread, 0.01);
        assert!(quote.timestamp > 0.0);
    }

    #[test]
    fn json_has_exact_field_set() {
        let scenarios = default_scenarios();
        let quote = MarketQuote::from_scenario(&scenarios[1]);
        let bytes = quote.to_json_bytes().unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "ask_price", "ask_qty", "bid_price", "bid_qty", "spread", "symbol", "timestamp"
            ]
        );
        assert_eq!(object["symbol"], "QQQ");
    }

    #[test]
    fn json_round_trips() {
        let scenarios = default_scenarios();
        let quote = MarketQuote::from_scenario(&scenarios[2]);
        let bytes = quote.to_json_bytes().unwrap();
        let parsed: MarketQuote = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(parsed.symbol, Symbol::IWM);
        assert_eq!(parsed.bid_qty, quote.bid_qty);
        assert_eq!(parsed.timestamp, quote.timestamp);
    }
}
