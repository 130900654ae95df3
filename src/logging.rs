//! File logging
//!
//! The terminal belongs to the UI, so log lines only ever go to a file.

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install a global subscriber writing to `path`, truncating it.
pub fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_rejected() {
        let path = std::env::temp_dir().join(format!("daynight-{}.log", std::process::id()));

        init_file_logging(&path).unwrap();
        assert!(path.exists());

        let err = init_file_logging(&path).unwrap_err();
        assert!(matches!(err, AppError::Logging(_)));

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let path = std::env::temp_dir()
            .join("daynight-no-such-dir")
            .join("board.log");
        let err = init_file_logging(&path).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
