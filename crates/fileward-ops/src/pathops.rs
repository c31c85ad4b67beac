//! Path-level capability wrappers
//!
//! Thin delegations to the platform's file primitives with fileward's
//! argument validation and error mapping layered on top.

use fileward_core::{Error, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

fn non_empty(path: &Path, what: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(Error::invalid_argument(format!("empty {} path", what)));
    }
    Ok(())
}

/// Whether `path` names an existing file or directory
pub fn exists(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    !path.as_os_str().is_empty() && path.exists()
}

/// Whether `path` exists and its metadata can be queried
pub fn accessible(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    !path.as_os_str().is_empty() && fs::metadata(path).is_ok()
}

/// Whether `path` names an existing directory
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    !path.as_os_str().is_empty() && path.is_dir()
}

/// Copy `src` to `dst`
///
/// Refuses to clobber an existing destination unless `overwrite` is set.
pub fn copy(src: impl AsRef<Path>, dst: impl AsRef<Path>, overwrite: bool) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    non_empty(src, "source")?;
    non_empty(dst, "destination")?;

    if !overwrite && dst.exists() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("destination already exists: {}", dst.display()),
        )));
    }

    fs::copy(src, dst)?;
    debug!(src = %src.display(), dst = %dst.display(), "file copied");
    Ok(())
}

/// Rename (move) `src` to `dst`
///
/// Cross-device moves are whatever the OS gives; no atomicity is promised
/// across filesystems.
pub fn rename(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> Result<()> {
    let (src, dst) = (src.as_ref(), dst.as_ref());
    non_empty(src, "source")?;
    non_empty(dst, "destination")?;

    fs::rename(src, dst)?;
    debug!(src = %src.display(), dst = %dst.display(), "file moved");
    Ok(())
}

/// Delete the file at `path`
pub fn remove(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    non_empty(path, "target")?;

    fs::remove_file(path)?;
    debug!(path = %path.display(), "file deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_exists_and_accessible() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("present.bin");
        std::fs::write(&path, b"x").unwrap();

        assert!(exists(&path));
        assert!(accessible(&path));
        assert!(!exists(dir.path().join("absent.bin")));
        assert!(!exists(""));
    }

    #[test]
    fn test_is_dir() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file.bin");
        std::fs::write(&file, b"x").unwrap();

        assert!(is_dir(dir.path()));
        assert!(!is_dir(&file));
    }

    #[test]
    fn test_copy_refuses_clobber() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src.bin");
        let dst = dir.path().join("dst.bin");
        std::fs::write(&src, b"source").unwrap();
        std::fs::write(&dst, b"existing").unwrap();

        assert!(copy(&src, &dst, false).is_err());
        assert_eq!(std::fs::read(&dst).unwrap(), b"existing");

        copy(&src, &dst, true).unwrap();
        assert_eq!(std::fs::read(&dst).unwrap(), b"source");
    }

    #[test]
    fn test_rename() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("old.bin");
        let dst = dir.path().join("new.bin");
        std::fs::write(&src, b"payload").unwrap();

        rename(&src, &dst).unwrap();
        assert!(!src.exists());
        assert_eq!(std::fs::read(&dst).unwrap(), b"payload");
    }

    #[test]
    fn test_remove() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("doomed.bin");
        std::fs::write(&path, b"x").unwrap();

        remove(&path).unwrap();
        assert!(!path.exists());
        assert!(remove(&path).is_err());
    }

    #[test]
    fn test_empty_arguments_rejected() {
        assert!(copy("", "somewhere", false).is_err());
        assert!(rename("somewhere", "").is_err());
        assert!(remove("").is_err());
    }
}
