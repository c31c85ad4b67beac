//! Recursive directory materialization

use fileward_core::{limits, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Ensure that `path` and every ancestor exist as directories
///
/// The path may use `/` or `\` separators; a trailing separator is
/// normalized away. The walk goes left to right, attempting to create each
/// prefix that ends at a separator and ignoring per-step failure, since most
/// ancestors already exist in the common case. The full path is then created
/// once more and classified: an already-existing directory is idempotent
/// success, anything else is an error.
///
/// # Errors
///
/// [`fileward_core::Error::InvalidArgument`] for an empty path or one
/// containing a NUL byte; [`fileward_core::Error::Io`] when creation fails
/// for any reason other than the directory already existing, including the
/// case where the final path exists but is not a directory.
pub fn ensure(path: &str) -> Result<()> {
    limits::validate_path_str(path)?;
    let path = limits::normalize_dir_path(path);

    for (index, ch) in path.char_indices() {
        if (ch == '/' || ch == '\\') && index > 0 {
            let _ = fs::create_dir(&path[..index]);
        }
    }

    match fs::create_dir(path) {
        Ok(()) => {
            debug!(path, "directory created");
            Ok(())
        }
        Err(source) if source.kind() == ErrorKind::AlreadyExists => {
            // Idempotent only when the existing entry really is a directory
            if Path::new(path).is_dir() {
                Ok(())
            } else {
                Err(source.into())
            }
        }
        Err(source) => Err(source.into()),
    }
}
