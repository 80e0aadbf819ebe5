use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures of the application shell. The deck and orchestrator have none.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Cannot read card assets from {}: {source}", .path.display())]
    Assets {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

