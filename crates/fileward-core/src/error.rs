//! Fileward error types

use thiserror::Error;

/// Result type alias for fileward operations
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for fileward operations
#[derive(Error, Debug)]
pub enum Error {
    /// Null, empty, or malformed input caught before any syscall
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operation attempted on a closed handle
    #[error("Invalid handle: handle is closed")]
    InvalidHandle,

    /// Underlying syscall failure (permission, disk full, device error)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Unlock without a prior lock on this handle
    #[error("Handle holds no lock")]
    NotLocked,

    /// Write loop failed after making partial progress
    #[error("Write failed after {written} bytes: {source}")]
    PartialWrite {
        written: u64,
        source: std::io::Error,
    },

    /// Operation not available on this platform
    #[error("Unsupported on this platform: {0}")]
    Unsupported(String),
}

impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    /// Create an unsupported error
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Error::Unsupported(msg.into())
    }

    /// The OS error number behind this failure, when one exists.
    ///
    /// Replaces a process-global "last error" slot: each error carries its
    /// own platform diagnostic code, so concurrent callers never observe
    /// each other's failures.
    pub fn os_code(&self) -> Option<i32> {
        match self {
            Error::Io(source) => source.raw_os_error(),
            Error::PartialWrite { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_os_code_from_io() {
        let err = Error::Io(io::Error::from_raw_os_error(13));
        assert_eq!(err.os_code(), Some(13));
    }

    #[test]
    fn test_os_code_from_partial_write() {
        let err = Error::PartialWrite {
            written: 42,
            source: io::Error::from_raw_os_error(28),
        };
        assert_eq!(err.os_code(), Some(28));
    }

    #[test]
    fn test_os_code_absent() {
        assert_eq!(Error::invalid_argument("empty path").os_code(), None);
        assert_eq!(Error::InvalidHandle.os_code(), None);
        assert_eq!(Error::NotLocked.os_code(), None);
    }
}
