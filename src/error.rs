//! Startup and shutdown errors
//!
//! Toggling and rendering cannot fail; only the terminal, the debug session and the
//! log file can.

use std::io;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("debug session error: {0}")]
    Debug(String),
    #[error("could not install logger: {0}")]
    Logging(String),
}

pub type Result<T, E = AppError> = std::result::Result<T, E>;
