//! Result type alias shared across the workspace.
//!
//! This module defines a convenient alias that defaults the error type to the
//! common `ToolError`, so functions can simply return `Result<T>`.
use crate::error::ToolError;

/// Workspace-wide `Result` alias with `ToolError` as the default error.
pub type Result<T, E = ToolError> = std::result::Result<T, E>;
