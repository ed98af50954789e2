//! Domain models for the fixture generator.
//!
//! This module groups the data types the writer stamps out to disk:
//! - `quote` — the `MarketQuote` fixture record and JSON encoding helpers.
//! - `scenarios` — the hardcoded per-symbol price/quantity templates.

pub mod quote;
pub mod scenarios;
