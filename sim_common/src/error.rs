//! Error types shared between the simulation support tools.
//!
//! The `ToolError` enum unifies common failure cases for file I/O,
//! serialization, and input validation, allowing both binaries to propagate a
//! single error type.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Unified error type shared by the generator and the checker.
#[derive(Error, Debug)]
pub enum ToolError {
    /// I/O error originating from the standard library or the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    /// The checker's input file does not exist on disk.
    #[error("Source file not found: {0}")]
    SourceNotFound(PathBuf),
}
