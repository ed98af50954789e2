//! Market data fixture generator for FPGA simulation.
//!
//! This binary writes static market-quote fixture files at the filesystem
//! locations the hardware simulation reads them from. It wires together two
//! small building blocks:
//!
//! - `model` — the `MarketQuote` record and the hardcoded `QuoteScenario`
//!   templates (SPY/QQQ/IWM) fixtures are stamped from.
//! - `FixtureWriter` — creates each target directory, writes the default
//!   fixture plus one fixture per scenario, and keeps going when one target
//!   fails.
//!
//! Target directories are fixed: `fpga_bridge` under the working directory
//! (the main location) and `target/verilog_out/fpga_bridge` (the build output
//! location). There are no CLI flags; the scenario list and the target paths
//! are compile-time constants. Per-directory write failures are logged as
//! warnings and never fail the run, so a read-only build tree does not block
//! regenerating the main location.
#![warn(missing_docs)]
use std::path::PathBuf;

use log::info;

use crate::model::scenarios::default_scenarios;
use crate::writer::FixtureWriter;

pub mod model;
mod writer;

/// Directories the simulation may look for market data in.
const TARGET_DIRS: [&str; 2] = ["fpga_bridge", "target/verilog_out/fpga_bridge"];

fn main() {
    init_logger();
    info!("Generating market data files for FPGA simulation");

    let targets: Vec<PathBuf> = TARGET_DIRS.iter().map(PathBuf::from).collect();
    FixtureWriter::write_all(&targets, &default_scenarios());

    info!("Market data generation complete");
    info!("Files ready for FPGA simulation");
    info!("Run: vivado -mode batch -source vivado_hft_continuous.tcl");
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
