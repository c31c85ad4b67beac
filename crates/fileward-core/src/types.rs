//! Shared types for fileward operations

use crate::error::{Error, Result};

/// Origin for a seek operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOrigin {
    /// Absolute position from the beginning of the file
    Start,
    /// Relative to the current position (negative deltas allowed)
    Current,
    /// Relative to the end of the file (negative deltas allowed)
    End,
}

/// Whole-file advisory lock mode
///
/// Locks are cooperative: they only constrain other callers that also take
/// locks. Re-locking an already-locked handle without unlocking first is not
/// supported behavior and must not be relied upon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    /// Incompatible with any other lock on the same file
    Exclusive,
    /// Compatible with other shared locks
    Shared,
}

/// Parsed open mode, accepted as an fopen-style mode string
///
/// Recognized forms: `r`, `w`, `a`, each optionally followed by `+` and/or
/// `b`. The `b` flag is accepted for compatibility and has no effect; all
/// I/O is byte-oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenMode {
    pub read: bool,
    pub write: bool,
    pub append: bool,
    pub truncate: bool,
    pub create: bool,
}

impl OpenMode {
    /// Parse an fopen-style mode string
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for an empty or unrecognized mode.
    pub fn parse(mode: &str) -> Result<Self> {
        let mut chars = mode.chars();
        let mut parsed = match chars.next() {
            Some('r') => Self {
                read: true,
                write: false,
                append: false,
                truncate: false,
                create: false,
            },
            Some('w') => Self {
                read: false,
                write: true,
                append: false,
                truncate: true,
                create: true,
            },
            Some('a') => Self {
                read: false,
                write: true,
                append: true,
                truncate: false,
                create: true,
            },
            Some(other) => {
                return Err(Error::invalid_argument(format!(
                    "unrecognized open mode '{}': must start with r, w, or a",
                    other
                )))
            }
            None => return Err(Error::invalid_argument("empty open mode")),
        };

        for flag in chars {
            match flag {
                '+' => {
                    parsed.read = true;
                    parsed.write = true;
                }
                'b' => {} // byte-oriented already
                other => {
                    return Err(Error::invalid_argument(format!(
                        "unrecognized open mode flag '{}'",
                        other
                    )))
                }
            }
        }

        Ok(parsed)
    }

    /// Whether this mode requests read access
    pub fn requests_read(&self) -> bool {
        self.read
    }

    /// Whether this mode can create the file if it does not exist
    pub fn creates(&self) -> bool {
        self.create
    }
}
