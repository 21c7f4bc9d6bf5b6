//! Size-gated file reading for text and dictionary input.
//!
//! Files above the size limit are rejected before any bytes are read.
//! Non-UTF-8 content is converted lossily with a warning.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Size at which to log about large files (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Maximum file size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// File content with metadata.
#[derive(Debug)]
pub struct FileContent {
    /// The file content as bytes.
    pub bytes: Vec<u8>,

    /// File size in bytes.
    pub size: u64,
}

/// Size-gated file reader.
pub struct FileReader {
    /// Maximum file size to read.
    max_size: u64,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl FileReader {
    /// Create a new file reader with the default limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Read a file, checking size limits.
    ///
    /// Returns `Err(FileTooLarge)` for files exceeding max_size.
    pub fn read(&self, path: &Path) -> Result<FileContent> {
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_error)?.len();
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let mut file = File::open(path).map_err(io_error)?;
        let mut bytes = Vec::with_capacity(size as usize);
        file.read_to_end(&mut bytes).map_err(io_error)?;

        Ok(FileContent { bytes, size })
    }

    /// Read a file as text, replacing invalid UTF-8 sequences.
    pub fn read_to_string(&self, path: &Path) -> Result<String> {
        let content = self.read(path)?;
        match String::from_utf8(content.bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::warn!(path = %path.display(), "file is not valid UTF-8");
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
