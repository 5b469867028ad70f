use std::io;
use std::path::PathBuf;

/// Transport-level failures.
///
/// Malformed tokens are never errors; they are skipped while ingesting. Only a
/// source that cannot be opened or read ends up here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open file {}: {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Failed to read line {line} ({parsed} pairs parsed before): {source}")]
    Read { line: usize, parsed: usize, source: io::Error },

    #[error("File '{name}' not found in current directory or ancestors")]
    NotFound { name: String },

    #[error("Failed to get current directory: {0}")]
    CurrentDir(#[source] io::Error),
}

impl Error {
    /// Pairs stored into the destination map before the failure.
    pub fn parsed(&self) -> usize {
        match self {
            Error::Read { parsed, .. } => *parsed,
            Error::Open { .. } | Error::NotFound { .. } | Error::CurrentDir(_) => 0,
        }
    }

    /// The source did not exist, as opposed to existing but failing to read.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Open { source, .. } => source.kind() == io::ErrorKind::NotFound,
            Error::NotFound { .. } => true,
            Error::Read { .. } | Error::CurrentDir(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
