//! 64-bit positioning operations on a file handle

use crate::handle::FileHandle;
use fileward_core::{Error, Result, SeekOrigin};
use std::io::{Seek, SeekFrom};

impl FileHandle {
    /// Move the position and return the new absolute offset
    ///
    /// # Errors
    ///
    /// [`SeekOrigin::Start`] rejects negative offsets with
    /// [`Error::InvalidArgument`]; `Current` and `End` permit negative
    /// deltas.
    pub fn seek(&mut self, offset: i64, origin: SeekOrigin) -> Result<u64> {
        let target = match origin {
            SeekOrigin::Start => {
                if offset < 0 {
                    return Err(Error::invalid_argument(format!(
                        "negative offset {} from start",
                        offset
                    )));
                }
                SeekFrom::Start(offset as u64)
            }
            SeekOrigin::Current => SeekFrom::Current(offset),
            SeekOrigin::End => SeekFrom::End(offset),
        };

        Ok(self.file()?.seek(target)?)
    }

    /// Current absolute position
    pub fn tell(&mut self) -> Result<u64> {
        Ok(self.file()?.stream_position()?)
    }

    /// Total file size in bytes
    ///
    /// Computed by seeking to the end and back. The saved position is
    /// restored best-effort even when the end seek fails; a partial failure
    /// is still reported as failure.
    pub fn size(&mut self) -> Result<u64> {
        let file = self.file()?;
        let saved = file.stream_position()?;

        let size = match file.seek(SeekFrom::End(0)) {
            Ok(size) => size,
            Err(source) => {
                let _ = file.seek(SeekFrom::Start(saved));
                return Err(source.into());
            }
        };

        file.seek(SeekFrom::Start(saved))?;
        Ok(size)
    }

    /// Move the position back to the start of the file
    pub fn rewind(&mut self) -> Result<()> {
        self.seek(0, SeekOrigin::Start)?;
        Ok(())
    }

    /// Whether the position is at or past the end of the file
    ///
    /// A closed handle reports `true`, as does any handle whose position or
    /// size cannot be queried. Conservative default: nothing more to read.
    pub fn eof(&mut self) -> bool {
        if !self.is_open() {
            return true;
        }
        match (self.tell(), self.size()) {
            (Ok(position), Ok(size)) => position >= size,
            _ => true,
        }
    }

    /// Truncate or extend the file to `new_size` bytes
    ///
    /// Seeks to the target length, then places the end-of-file marker at the
    /// current position. If either step fails the resulting size is
    /// unspecified and the caller must re-query.
    pub fn truncate(&mut self, new_size: u64) -> Result<()> {
        let file = self.file()?;
        file.seek(SeekFrom::Start(new_size))?;
        file.set_len(new_size)?;
        Ok(())
    }
}
