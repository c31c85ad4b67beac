//! # Fileward Core
//!
//! Error taxonomy, shared types, and validation limits for the fileward
//! file-access layer.
//!
//! This crate provides the foundational pieces the operational crates build
//! on:
//! - **Error / Result**: structured failures carrying their own platform
//!   diagnostic codes
//! - **OpenMode**: fopen-style mode strings parsed into explicit flags
//! - **SeekOrigin / LockMode**: positioning and locking vocabulary
//! - **limits**: pre-syscall input validation and allocation bounds
//!
//! ## Example
//!
//! ```rust
//! use fileward_core::{OpenMode, Result};
//!
//! fn check_mode(mode: &str) -> Result<()> {
//!     let parsed = OpenMode::parse(mode)?;
//!     println!("requests read: {}", parsed.requests_read());
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod limits;
pub mod types;

// Re-export commonly used items
pub use error::{Error, Result};
pub use limits::{DEFAULT_WIPE_CHUNK, MAX_WIPE_CHUNK};
pub use types::{LockMode, OpenMode, SeekOrigin};
