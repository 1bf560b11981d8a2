//! Error types for mediainfo-wrapper.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting media metadata.
///
/// Per-field lookup and parse failures are never reported here; they become
/// absent values on the record instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input file does not exist.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The native layer failed (library unavailable, invalid handle, open failure, bad argument).
    #[error(transparent)]
    Native(#[from] mediainfo_native::Error),

    /// Configuration could not be read or is invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a file not found error.
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether the native library refused to open the input.
    pub fn is_open_failed(&self) -> bool {
        matches!(self, Self::Native(mediainfo_native::Error::OpenFailed { .. }))
    }

    /// Whether the session was invalid (library missing or handle released).
    pub fn is_invalid_handle(&self) -> bool {
        matches!(self, Self::Native(mediainfo_native::Error::InvalidHandle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::file_not_found("/music/missing.flac");
        assert_eq!(err.to_string(), "file not found: /music/missing.flac");

        let err = Error::config("bad toml");
        assert_eq!(err.to_string(), "configuration error: bad toml");

        let err = Error::from(mediainfo_native::Error::open_failed("/music/broken.mp3"));
        assert_eq!(err.to_string(), "MediaInfo failed to open: /music/broken.mp3");
    }

    #[test]
    fn test_error_classification() {
        let err = Error::from(mediainfo_native::Error::open_failed("a.mkv"));
        assert!(err.is_open_failed());
        assert!(!err.is_invalid_handle());

        let err = Error::from(mediainfo_native::Error::InvalidHandle);
        assert!(err.is_invalid_handle());
        assert!(!err.is_open_failed());

        assert!(!Error::file_not_found("a.mkv").is_open_failed());
    }
}
