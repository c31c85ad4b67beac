//! Secure file destruction (overwrite-then-delete)
//!
//! Overwrites a file's full length with zeros in bounded chunks, flushes to
//! stable storage, and only then deletes the path. Deletion is strictly the
//! last step: any earlier failure leaves a (partially zeroed) file behind
//! rather than deleting one that still holds recoverable content.

use crate::handle::FileHandle;
use fileward_core::{limits, Error, Result};
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Options for secure destruction
#[derive(Debug, Clone)]
pub struct WipeOptions {
    /// Overwrite chunk size in bytes (default: 64KB)
    pub chunk_size: usize,
}

impl Default for WipeOptions {
    fn default() -> Self {
        Self {
            chunk_size: limits::DEFAULT_WIPE_CHUNK,
        }
    }
}

/// Progress information during an overwrite
#[derive(Debug, Clone)]
pub struct WipeProgress {
    /// Total bytes that will be overwritten
    pub total_bytes: u64,
    /// Bytes overwritten so far
    pub bytes_overwritten: u64,
    /// Time elapsed since the wipe started
    pub elapsed: Duration,
}

/// Callback type for progress updates
pub type WipeCallback = Arc<dyn Fn(&WipeProgress) + Send + Sync>;

/// Result of a completed wipe
#[derive(Debug)]
pub struct WipeResult {
    /// Bytes overwritten with zeros (equals the original file size)
    pub bytes_overwritten: u64,
    /// Number of chunk writes issued
    pub chunk_writes: u64,
    /// Time elapsed
    pub elapsed: Duration,
}

/// Secure file destroyer
pub struct Wiper {
    options: WipeOptions,
}

impl Wiper {
    /// Create a wiper with default options
    pub fn new() -> Self {
        Self {
            options: WipeOptions::default(),
        }
    }

    /// Create with custom options
    pub fn with_options(options: WipeOptions) -> Self {
        Self { options }
    }

    /// Overwrite `path` with zeros, flush, close, and delete it
    ///
    /// Steps, each failure short-circuiting with the handle released:
    /// 1. Open read-write; on failure the target is untouched.
    /// 2. An empty file skips the overwrite and goes straight to deletion.
    /// 3. Write `file_size / chunk` full zero chunks from offset 0, the
    ///    chunk clamped to `min(chunk_size, file_size)`.
    /// 4. Write the `file_size % chunk` remainder from an exactly-sized
    ///    buffer.
    /// 5. Flush to stable storage.
    /// 6. Close, then delete the path.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] for a zero or oversized chunk size, before
    /// the file is opened. Any open, write, or flush failure aborts the
    /// whole operation with the file left in place, not deleted.
    pub fn wipe(
        &self,
        path: impl AsRef<Path>,
        progress: Option<WipeCallback>,
    ) -> Result<WipeResult> {
        limits::validate_chunk_size(self.options.chunk_size)?;
        let path = path.as_ref();
        let start = Instant::now();

        let mut handle = FileHandle::open(path, "r+b")?;

        match self.overwrite(&mut handle, progress.as_ref(), start) {
            Ok((bytes_overwritten, chunk_writes)) => {
                handle.close()?;
                fs::remove_file(path)?;
                info!(
                    path = %path.display(),
                    bytes = bytes_overwritten,
                    "file overwritten and deleted"
                );
                Ok(WipeResult {
                    bytes_overwritten,
                    chunk_writes,
                    elapsed: start.elapsed(),
                })
            }
            Err(error) => {
                // Deletion is never reached on failure: a partially zeroed
                // file on disk beats deleting one still holding its content.
                let _ = handle.close();
                warn!(
                    path = %path.display(),
                    error = %error,
                    "wipe aborted; file left in place"
                );
                Err(error)
            }
        }
    }

    fn overwrite(
        &self,
        handle: &mut FileHandle,
        progress: Option<&WipeCallback>,
        start: Instant,
    ) -> Result<(u64, u64)> {
        let total = handle.size()?;
        if total == 0 {
            return Ok((0, 0));
        }

        let chunk = (self.options.chunk_size as u64).min(total);
        let zeros = vec![0u8; limits::u64_to_usize(chunk, "wipe chunk")?];
        handle.rewind()?;

        let mut bytes_overwritten: u64 = 0;
        let mut chunk_writes: u64 = 0;

        for length in ZeroChunks::new(total, chunk) {
            let remainder;
            let buf: &[u8] = if length == chunk {
                &zeros
            } else {
                // final write, sized exactly to the remainder
                remainder = vec![0u8; length as usize];
                &remainder
            };

            let written = handle.write(buf)?;
            if written != length {
                return Err(Error::Io(io::Error::new(
                    io::ErrorKind::WriteZero,
                    format!("short write during overwrite: {} of {} bytes", written, length),
                )));
            }

            bytes_overwritten += written;
            chunk_writes += 1;

            if let Some(callback) = progress {
                callback(&WipeProgress {
                    total_bytes: total,
                    bytes_overwritten,
                    elapsed: start.elapsed(),
                });
            }
        }

        handle.flush()?;
        Ok((bytes_overwritten, chunk_writes))
    }
}

impl Default for Wiper {
    fn default() -> Self {
        Self::new()
    }
}

/// Overwrite `path` with zeros in `chunk_size` blocks, then delete it
pub fn secure_delete(path: impl AsRef<Path>, chunk_size: usize) -> Result<WipeResult> {
    Wiper::with_options(WipeOptions { chunk_size }).wipe(path, None)
}

/// Bounded iterator over zero-chunk lengths covering `total` bytes
///
/// Yields full `chunk`-sized lengths followed by at most one remainder, so
/// that at every step `yielded + remaining == total`.
struct ZeroChunks {
    remaining: u64,
    chunk: u64,
}

impl ZeroChunks {
    fn new(total: u64, chunk: u64) -> Self {
        Self {
            remaining: total,
            chunk,
        }
    }
}

impl Iterator for ZeroChunks {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        let length = self.remaining.min(self.chunk);
        self.remaining -= length;
        Some(length)
    }
}
