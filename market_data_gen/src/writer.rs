//! Writing fixture files into the simulation's data directories.
//!
//! The writer stamps a `MarketQuote` from each scenario and persists it as
//! pretty-printed JSON. Each target directory receives:
//!
//! - `market_data.json` — the default fixture, stamped from the first scenario.
//! - `market_data_<symbol>.json` — one fixture per scenario, symbol lowercased.
//!
//! A failure in one target directory (missing permissions, a file squatting on
//! the directory path, a full disk) is logged and does not stop the remaining
//! directories from being processed. There is no retry and no cleanup of
//! partially written files.
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use sim_common::ToolError;

use crate::model::quote::MarketQuote;
use crate::model::scenarios::QuoteScenario;

/// Name of the default fixture file inside each target directory.
pub const DEFAULT_FIXTURE_FILE: &str = "market_data.json";

/// Helper type for writing fixture files.
pub struct FixtureWriter;

impl FixtureWriter {
    /// Write fixtures into every target directory, continuing past failures.
    pub fn write_all(targets: &[PathBuf], scenarios: &[QuoteScenario]) {
        for dir in targets {
            if let Err(e) = Self::write_target(dir, scenarios) {
                warn!("Could not create {}: {}", dir.display(), e);
            }
        }
    }

    /// Write the default fixture and one per-scenario fixture into `dir`.
    ///
    /// Creates `dir` (and parents) if absent. Existing fixture files are
    /// overwritten. Returns the first error encountered; files written before
    /// the failure are left in place.
    pub fn write_target(dir: &Path, scenarios: &[QuoteScenario]) -> Result<(), ToolError> {
        fs::create_dir_all(dir)?;

        let default = scenarios
            .first()
            .ok_or_else(|| ToolError::Format("scenario list is empty".to_string()))?;
        let quote = MarketQuote::from_scenario(default);
        let default_path = dir.join(DEFAULT_FIXTURE_FILE);
        fs::write(&default_path, quote.to_json_bytes()?)?;
        info!("Created: {}", default_path.display());
        info!(
            "  {}: ${:.2}/${:.2}",
            quote.symbol, quote.bid_price, quote.ask_price
        );

        for scenario in scenarios {
            let quote = MarketQuote::from_scenario(scenario);
            let path = dir.join(format!("market_data_{}.json", scenario.symbol.file_stem()));
            fs::write(&path, quote.to_json_bytes()?)?;
        }
        Ok(())
    }
}
