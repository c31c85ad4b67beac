//! # Fileward Ops
//!
//! Cross-boundary file-access layer unifying stream I/O with OS-level handle
//! semantics: 64-bit positioning, whole-file advisory locking, truncation,
//! recursive directory materialization, and secure (overwrite-then-delete)
//! file destruction.
//!
//! Everything is synchronous and blocks for the duration of the underlying
//! syscalls. A [`FileHandle`] is not internally synchronized; `&mut self` on
//! every mutating operation keeps single-handle use data-race free at
//! compile time, and advisory locking is the only cross-process coordination
//! offered.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fileward_ops::{ensure, secure_delete, FileHandle, SeekOrigin};
//!
//! fn main() -> fileward_ops::Result<()> {
//!     ensure("spool/outgoing")?;
//!
//!     let mut handle = FileHandle::open("spool/outgoing/job.bin", "w+b")?;
//!     handle.write(b"payload")?;
//!     handle.seek(0, SeekOrigin::Start)?;
//!     handle.close()?;
//!
//!     secure_delete("spool/outgoing/job.bin", 64 * 1024)?;
//!     Ok(())
//! }
//! ```

pub mod dir;
pub mod handle;
pub mod pathops;
pub mod wipe;

mod lock;
mod position;
mod transfer;

// Re-export commonly used items
pub use dir::ensure;
pub use handle::FileHandle;
pub use wipe::{secure_delete, WipeCallback, WipeOptions, WipeProgress, WipeResult, Wiper};

pub use fileward_core::{Error, LockMode, OpenMode, Result, SeekOrigin};
