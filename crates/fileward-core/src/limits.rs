//! Validation limits and path helpers
//!
//! Bounds and input checks applied before any syscall is issued.

use crate::error::{Error, Result};

/// Default chunk size for secure overwrite (64KB)
pub const DEFAULT_WIPE_CHUNK: usize = 64 * 1024;

/// Maximum allocation for a single overwrite buffer (256 MB)
pub const MAX_WIPE_CHUNK: usize = 256 * 1024 * 1024;

/// Validate a secure-overwrite chunk size
pub fn validate_chunk_size(chunk_size: usize) -> Result<()> {
    if chunk_size == 0 {
        return Err(Error::invalid_argument("chunk size must be non-zero"));
    }
    if chunk_size > MAX_WIPE_CHUNK {
        return Err(Error::invalid_argument(format!(
            "chunk size {} exceeds limit {}",
            chunk_size, MAX_WIPE_CHUNK
        )));
    }
    Ok(())
}

/// Safely convert u64 to usize with platform checking
pub fn u64_to_usize(value: u64, context: &str) -> Result<usize> {
    value.try_into().map_err(|_| {
        Error::invalid_argument(format!(
            "{}: value {} exceeds platform usize limit",
            context, value
        ))
    })
}

/// Validate a path string before use
///
/// Rejects empty paths and paths containing NUL bytes, which can never name
/// a real file on any supported platform.
pub fn validate_path_str(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(Error::invalid_argument("empty path"));
    }
    if path.contains('\0') {
        return Err(Error::invalid_argument("path contains NUL byte"));
    }
    Ok(())
}

/// Strip trailing `/` or `\` separators from a directory path
///
/// A bare root (`/` or `\`) is preserved rather than reduced to the empty
/// string.
pub fn normalize_dir_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    if trimmed.is_empty() && !path.is_empty() {
        &path[..1]
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_chunk_size() {
        assert!(validate_chunk_size(1).is_ok());
        assert!(validate_chunk_size(DEFAULT_WIPE_CHUNK).is_ok());
        assert!(validate_chunk_size(0).is_err());
        assert!(validate_chunk_size(MAX_WIPE_CHUNK + 1).is_err());
    }

    #[test]
    fn test_u64_to_usize() {
        assert_eq!(u64_to_usize(1024, "test").unwrap(), 1024);

        #[cfg(target_pointer_width = "32")]
        {
            assert!(u64_to_usize(u64::MAX, "test").is_err());
        }
    }

    #[test]
    fn test_validate_path_str() {
        assert!(validate_path_str("a/b").is_ok());
        assert!(validate_path_str("").is_err());
        assert!(validate_path_str("a\0b").is_err());
    }

    #[test]
    fn test_normalize_dir_path() {
        assert_eq!(normalize_dir_path("a/b/c/"), "a/b/c");
        assert_eq!(normalize_dir_path("a/b/c"), "a/b/c");
        assert_eq!(normalize_dir_path("a\\b\\"), "a\\b");
        assert_eq!(normalize_dir_path("a/b//"), "a/b");
        assert_eq!(normalize_dir_path("/"), "/");
        assert_eq!(normalize_dir_path(""), "");
    }
}
