//! File handle lifecycle
//!
//! [`FileHandle`] owns one open file and exposes positioning, locking, and
//! transfer operations on it. The stream view and the raw descriptor view of
//! the underlying file are the same resource here, so they can never disagree
//! about position or validity.

use fileward_core::{limits, Error, LockMode, OpenMode, Result};
use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::debug;

/// An open, exclusively-owned reference to one underlying file
///
/// Every successful open is paired with exactly one [`close`](Self::close).
/// A closed handle stays distinguishable from an open one: any further
/// operation fails with [`Error::InvalidHandle`] instead of touching a stale
/// descriptor. Dropping an open handle releases the descriptor as a
/// fallback, but going through `close` is the contract.
///
/// # Example
///
/// ```rust,no_run
/// use fileward_ops::FileHandle;
///
/// let mut handle = FileHandle::open("data.bin", "r+b").unwrap();
/// println!("size: {} bytes", handle.size().unwrap());
/// handle.close().unwrap();
/// ```
#[derive(Debug)]
pub struct FileHandle {
    pub(crate) file: Option<File>,
    path: PathBuf,
    pub(crate) lock_state: Option<LockMode>,
}

impl FileHandle {
    /// Open a file with an fopen-style mode string
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty path or an empty or
    /// malformed mode, before any syscall is made. Syscall failures surface
    /// as [`Error::Io`].
    pub fn open(path: impl AsRef<Path>, mode: &str) -> Result<Self> {
        let mode = OpenMode::parse(mode)?;
        Self::open_with(path, mode)
    }

    /// Open a file with an already-parsed [`OpenMode`]
    pub fn open_with(path: impl AsRef<Path>, mode: OpenMode) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::invalid_argument("empty path"));
        }

        let file = open_options(&mode).open(path)?;
        debug!(path = %path.display(), "handle opened");

        Ok(Self {
            file: Some(file),
            path: path.to_path_buf(),
            lock_state: None,
        })
    }

    /// Open a file from a UTF-8 path string
    ///
    /// Validates the path string (empty, embedded NUL) before any syscall.
    /// When the mode requests read access without creating the file, the
    /// path's existence is pre-checked and an inaccessible path fails with
    /// [`Error::InvalidArgument`]; this keeps a read-intent open from ever
    /// creating the file as a side effect. Fail-closed: no partial handle is
    /// ever returned.
    pub fn open_encoded(path: &str, mode: &str) -> Result<Self> {
        limits::validate_path_str(path)?;
        let mode = OpenMode::parse(mode)?;

        if mode.requests_read() && !mode.creates() && !Path::new(path).exists() {
            return Err(Error::invalid_argument(format!(
                "path not accessible: {}",
                path
            )));
        }

        Self::open_with(path, mode)
    }

    /// Close the handle, invalidating it
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidHandle`] if the handle was already closed.
    pub fn close(&mut self) -> Result<()> {
        match self.file.take() {
            Some(file) => {
                drop(file);
                self.lock_state = None;
                debug!(path = %self.path.display(), "handle closed");
                Ok(())
            }
            None => Err(Error::InvalidHandle),
        }
    }

    /// Whether the handle is still open
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// The path this handle was opened from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The lock currently held through this handle, if any
    pub fn lock_mode(&self) -> Option<LockMode> {
        self.lock_state
    }

    pub(crate) fn file(&mut self) -> Result<&mut File> {
        self.file.as_mut().ok_or(Error::InvalidHandle)
    }

    pub(crate) fn file_ref(&self) -> Result<&File> {
        self.file.as_ref().ok_or(Error::InvalidHandle)
    }
}

fn open_options(mode: &OpenMode) -> OpenOptions {
    let mut options = OpenOptions::new();
    options
        .read(mode.read)
        .write(mode.write)
        .append(mode.append)
        .truncate(mode.truncate)
        .create(mode.create);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_open_close_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.bin");
        std::fs::write(&path, b"data").unwrap();

        // Open, close, and reopen repeatedly: no descriptor leak, no stale state
        for _ in 0..3 {
            let mut handle = FileHandle::open(&path, "r").unwrap();
            assert!(handle.is_open());
            handle.close().unwrap();
            assert!(!handle.is_open());
        }
    }

    #[test]
    fn test_close_twice_is_invalid_handle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.bin");
        std::fs::write(&path, b"data").unwrap();

        let mut handle = FileHandle::open(&path, "r").unwrap();
        handle.close().unwrap();
        assert!(matches!(handle.close(), Err(Error::InvalidHandle)));
    }

    #[test]
    fn test_open_rejects_bad_arguments() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("file.bin");
        std::fs::write(&path, b"data").unwrap();

        assert!(matches!(
            FileHandle::open("", "r"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            FileHandle::open(&path, ""),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            FileHandle::open(&path, "q"),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_open_mode_w_creates() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("created.bin");

        let mut handle = FileHandle::open(&path, "w").unwrap();
        handle.close().unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_open_encoded_read_precheck() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.bin");

        // Read mode on a missing path is rejected before the syscall
        let err = FileHandle::open_encoded(missing.to_str().unwrap(), "r").unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(!missing.exists());

        // Create-capable modes do not pre-check
        let created = dir.path().join("created.bin");
        let mut handle = FileHandle::open_encoded(created.to_str().unwrap(), "w").unwrap();
        handle.close().unwrap();
        assert!(created.exists());
    }

    #[test]
    fn test_open_encoded_rejects_nul() {
        assert!(matches!(
            FileHandle::open_encoded("a\0b", "r"),
            Err(Error::InvalidArgument(_))
        ));
    }
}
