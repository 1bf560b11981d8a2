//! Error types for mediainfo-native.

use std::path::PathBuf;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the native interop layer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The shared library could not be located, loaded, or is missing entry points.
    #[error("MediaInfo library unavailable: {0}")]
    LibraryUnavailable(String),

    /// The session never obtained a native handle or has already been released.
    #[error("native MediaInfo handle is invalid or already released")]
    InvalidHandle,

    /// The native library refused to open the file.
    #[error("MediaInfo failed to open: {}", path.display())]
    OpenFailed { path: PathBuf },

    /// Buffered parsing finished without the library accepting the data.
    #[error("MediaInfo did not accept the buffered stream")]
    BufferRejected,

    /// A parameter or option name was empty or not representable natively.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An I/O error occurred while feeding a buffered session.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a library unavailable error.
    pub fn library_unavailable(message: impl Into<String>) -> Self {
        Self::LibraryUnavailable(message.into())
    }

    /// Create an open failed error.
    pub fn open_failed(path: impl Into<PathBuf>) -> Self {
        Self::OpenFailed { path: path.into() }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::open_failed("/media/movie.mkv");
        assert_eq!(err.to_string(), "MediaInfo failed to open: /media/movie.mkv");

        let err = Error::InvalidHandle;
        assert_eq!(
            err.to_string(),
            "native MediaInfo handle is invalid or already released"
        );

        let err = Error::invalid_argument("parameter must be non-empty");
        assert_eq!(err.to_string(), "invalid argument: parameter must be non-empty");

        let err = Error::library_unavailable("libmediainfo.so.0: not found");
        assert_eq!(
            err.to_string(),
            "MediaInfo library unavailable: libmediainfo.so.0: not found"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err = Error::from(io_err);
        assert!(matches!(err, Error::Io(_)));
    }
}
