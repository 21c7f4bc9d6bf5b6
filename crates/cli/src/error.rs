use std::path::PathBuf;

use crate::cipher::CipherError;
use crate::pattern::PatternError;

/// Lexiscan error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds maximum size limit.
    #[error("file too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Malformed cipher key or frequency table.
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// Search patterns that cannot be compiled.
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),
}

/// Result type using lexiscan Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Something was found (or nothing needed finding)
    Success = 0,
    /// A search found no match, or spell check found unknown words
    NoMatches = 1,
    /// Configuration, argument or key error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Cipher(_) | Error::Pattern(_) => ExitCode::ConfigError,
            Error::Io { .. } | Error::FileTooLarge { .. } => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
