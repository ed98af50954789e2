//!
//! Common types and utilities shared by the FPGA simulation support tools.
//!
//! This crate aggregates:
//! - `error` — unified error type `ToolError` used across the workspace.
//! - `result` — handy `Result<T, ToolError>` alias.
//! - `symbols` — ticker symbols covered by the fixture scenarios.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod symbols;

pub use error::ToolError;
pub use result::Result;
pub use symbols::Symbol;
