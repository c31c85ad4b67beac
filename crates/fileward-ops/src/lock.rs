//! Whole-file advisory locking
//!
//! Locks span the entire file and are advisory: they constrain only other
//! callers that also take locks. On Unix this is `flock(2)`; other platforms
//! report [`Error::Unsupported`].

use crate::handle::FileHandle;
use fileward_core::{Error, LockMode, Result};
#[cfg(unix)]
use tracing::debug;

#[cfg(unix)]
fn flock(file: &std::fs::File, operation: libc::c_int) -> std::io::Result<()> {
    use std::os::unix::io::AsRawFd;

    // SAFETY: the descriptor is owned by `file` and stays valid for the call.
    let rc = unsafe { libc::flock(file.as_raw_fd(), operation) };
    if rc == 0 {
        Ok(())
    } else {
        Err(std::io::Error::last_os_error())
    }
}

impl FileHandle {
    /// Take a whole-file advisory lock, blocking until it is granted
    ///
    /// Exclusive locks conflict with every other lock on the same file;
    /// shared locks coexist with other shared locks. Locking an
    /// already-locked handle is not supported behavior.
    #[cfg(unix)]
    pub fn lock(&mut self, mode: LockMode) -> Result<()> {
        let operation = match mode {
            LockMode::Exclusive => libc::LOCK_EX,
            LockMode::Shared => libc::LOCK_SH,
        };

        flock(self.file_ref()?, operation)?;
        self.lock_state = Some(mode);
        debug!(path = %self.path().display(), ?mode, "file locked");
        Ok(())
    }

    /// Release the lock held through this handle
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotLocked`] if no lock was taken through this
    /// handle.
    #[cfg(unix)]
    pub fn unlock(&mut self) -> Result<()> {
        if self.lock_state.is_none() {
            return Err(Error::NotLocked);
        }

        flock(self.file_ref()?, libc::LOCK_UN)?;
        self.lock_state = None;
        debug!(path = %self.path().display(), "file unlocked");
        Ok(())
    }

    #[cfg(not(unix))]
    pub fn lock(&mut self, _mode: LockMode) -> Result<()> {
        self.file_ref()?;
        Err(Error::unsupported("whole-file advisory locking"))
    }

    #[cfg(not(unix))]
    pub fn unlock(&mut self) -> Result<()> {
        self.file_ref()?;
        Err(Error::unsupported("whole-file advisory locking"))
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_lock_unlock_exclusive() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("locked.bin");
        std::fs::write(&path, b"data").unwrap();

        let mut handle = FileHandle::open(&path, "r+").unwrap();
        handle.lock(LockMode::Exclusive).unwrap();
        assert_eq!(handle.lock_mode(), Some(LockMode::Exclusive));

        handle.unlock().unwrap();
        assert_eq!(handle.lock_mode(), None);
        handle.close().unwrap();
    }

    #[test]
    fn test_shared_locks_coexist() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("shared.bin");
        std::fs::write(&path, b"data").unwrap();

        let mut first = FileHandle::open(&path, "r").unwrap();
        let mut second = FileHandle::open(&path, "r").unwrap();

        first.lock(LockMode::Shared).unwrap();
        second.lock(LockMode::Shared).unwrap();

        first.unlock().unwrap();
        second.unlock().unwrap();
    }

    #[test]
    fn test_unlock_without_lock() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("never_locked.bin");
        std::fs::write(&path, b"data").unwrap();

        let mut handle = FileHandle::open(&path, "r").unwrap();
        assert!(matches!(handle.unlock(), Err(Error::NotLocked)));
        handle.close().unwrap();
    }

    #[test]
    fn test_lock_on_closed_handle() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("closed.bin");
        std::fs::write(&path, b"data").unwrap();

        let mut handle = FileHandle::open(&path, "r").unwrap();
        handle.close().unwrap();
        assert!(matches!(
            handle.lock(LockMode::Exclusive),
            Err(Error::InvalidHandle)
        ));
    }
}
