//! Byte transfer operations on a file handle

use crate::handle::FileHandle;
use fileward_core::{Error, Result};
use std::io::{ErrorKind, Read, Write};

impl FileHandle {
    /// Write a buffer, retrying until all bytes land or progress stops
    ///
    /// The remaining unwritten suffix is resubmitted until every byte is
    /// written. A zero-byte write without an error terminates the loop early
    /// and the bytes written so far are returned; that is not a failure.
    /// Interrupted writes are retried.
    ///
    /// An empty buffer is a no-op returning 0.
    ///
    /// # Errors
    ///
    /// A write error after partial progress is reported as
    /// [`Error::PartialWrite`], carrying the exact count of bytes already
    /// written so callers keep byte-accurate accounting.
    pub fn write(&mut self, buf: &[u8]) -> Result<u64> {
        if buf.is_empty() {
            return Ok(0);
        }

        let file = self.file()?;
        let mut written: u64 = 0;
        let mut remaining = buf;

        while !remaining.is_empty() {
            match file.write(remaining) {
                Ok(0) => break, // no progress, no error: stop with what we have
                Ok(count) => {
                    written += count as u64;
                    remaining = &remaining[count..];
                }
                Err(source) if source.kind() == ErrorKind::Interrupted => continue,
                Err(source) => return Err(Error::PartialWrite { written, source }),
            }
        }

        Ok(written)
    }

    /// Perform a single bounded read into `buf`
    ///
    /// Returns the number of bytes read; 0 means end of file. An empty
    /// buffer is a no-op returning 0. On error no count is returned and the
    /// buffer contents must not be trusted.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<u64> {
        if buf.is_empty() {
            return Ok(0);
        }

        let count = self.file()?.read(buf)?;
        Ok(count as u64)
    }

    /// Flush pending writes through to stable storage
    pub fn flush(&mut self) -> Result<()> {
        let file = self.file()?;
        file.flush()?;
        file.sync_data()?;
        Ok(())
    }
}
