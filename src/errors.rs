//! Process-level error types
//!
//! The sorting core cannot fail: completion is success and bad settings are
//! clamped. What can fail is the terminal around it and the optional log file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Entering/leaving raw mode, drawing, or reading events failed
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("cannot open log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already installed: {0}")]
    Logger(#[from] log::SetLoggerError),
}
