//! Demo error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to read fixture {path}: {source}")]
    ReadFixture { path: PathBuf, source: io::Error },
    #[error("invalid fixture {origin}: {source}")]
    ParseFixture {
        origin: String,
        source: serde_json::Error,
    },
    #[error("logger setup failed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
