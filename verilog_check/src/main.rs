//! Verilog pre-flight checker for the Vivado simulation flow.
//!
//! Reads the generated `hft_zero_plus.v` from the working directory and runs a
//! handful of literal substring checks against it before the file is handed to
//! the simulation toolchain: pipeline register declarations, the module
//! declaration, and the closing `endmodule`. The rules live in `rules` and are
//! deliberately lexical; see that module for the accepted imprecision.
//!
//! Output goes to the console only. The process exit status is the contract
//! with the invoking toolchain script: success when the issue list is empty,
//! failure when any rule flagged or the source file is missing or unreadable.
#![warn(missing_docs)]
use std::fs;
use std::path::Path;
use std::process::ExitCode;

use log::{error, info};
use sim_common::Result;
use sim_common::ToolError;

use crate::rules::check_source;

mod rules;

/// The generated Verilog file this checker validates.
const SOURCE_FILE: &str = "hft_zero_plus.v";

/// Read the source file and apply the rule table.
///
/// Fails with `ToolError::SourceNotFound` when the file is absent so the
/// caller can report it distinctly from read errors. File size is computed for
/// reporting only.
fn run_checks(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(ToolError::SourceNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let size_kb = content.len() as f64 / 1024.0;
    info!("File: {} ({:.1}KB)", path.display(), size_kb);
    Ok(check_source(&content))
}

fn main() -> ExitCode {
    init_logger();
    info!("Checking HFT Verilog syntax");

    match run_checks(Path::new(SOURCE_FILE)) {
        Ok(issues) if issues.is_empty() => {
            info!("Basic syntax checks passed");
            info!("Pipeline registers declared");
            info!("Module structure correct");
            info!("Ready for Vivado simulation");
            info!("Run in the Vivado TCL console: source au50_pipeline_fixed.tcl");
            info!("Then: launch_simulation");
            ExitCode::SUCCESS
        }
        Ok(issues) => {
            error!("Syntax issues found:");
            for issue in &issues {
                error!("  - {}", issue);
            }
            error!("Fix syntax issues before simulation");
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("verilog_check_{}_{}.v", tag, std::process::id()))
    }

    #[test]
    fn missing_file_is_reported_as_source_not_found() {
        let path = Path::new("no_such_dir/hft_zero_plus.v");
        match run_checks(path) {
            Err(ToolError::SourceNotFound(p)) => assert_eq!(p, path),
            other => panic!("expected SourceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn existing_file_is_checked() {
        let path = scratch_file("ok");
        fs::write(&path, "module hft_zero_plus ();\nendmodule\n").unwrap();

        let issues = run_checks(&path).unwrap();
        assert!(issues.is_empty());

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn issues_from_file_content_surface() {
        let path = scratch_file("bad");
        fs::write(&path, "endmodule\n").unwrap();

        let issues = run_checks(&path).unwrap();
        assert_eq!(issues, ["Missing module declaration"]);

        fs::remove_file(&path).unwrap();
    }
}
