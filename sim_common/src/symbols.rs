//! Ticker symbols covered by the fixture scenarios.
//!
//! The generator writes one fixture file per symbol, and the file name embeds
//! the lowercase symbol (`market_data_spy.json`). Parsing is case-insensitive
//! so that either `spy` or `SPY` resolves to the same value.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Set of ticker symbols the generator produces fixtures for.
#[allow(missing_docs)]
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    Hash,
    Eq,
    PartialEq,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    SPY,
    QQQ,
    IWM,
}

impl Symbol {
    /// Lowercase form used in fixture file names.
    pub fn file_stem(&self) -> String {
        self.to_string().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_ticker_spelling() {
        assert_eq!(Symbol::SPY.to_string(), "SPY");
        assert_eq!(Symbol::QQQ.to_string(), "QQQ");
        assert_eq!(Symbol::IWM.to_string(), "IWM");
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("spy".parse::<Symbol>().unwrap(), Symbol::SPY);
        assert_eq!("Iwm".parse::<Symbol>().unwrap(), Symbol::IWM);
        assert!("VOO".parse::<Symbol>().is_err());
    }

    #[test]
    fn file_stem_is_lowercase() {
        assert_eq!(Symbol::QQQ.file_stem(), "qqq");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Symbol::SPY).unwrap();
        assert_eq!(json, "\"SPY\"");
    }
}
