//! Fileward CLI
//!
//! Command-line front end for the fileward file-access layer: inspect
//! files, materialize directory trees, and securely destroy file contents.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use fileward_core::DEFAULT_WIPE_CHUNK;
use fileward_ops::{ensure, pathops, FileHandle, WipeOptions, Wiper};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Fileward - file handles, locking, and secure destruction
#[derive(Parser)]
#[command(name = "fileward")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show existence, type, and size of a path
    Stat {
        /// Path to inspect
        path: PathBuf,
    },

    /// Create a directory and all of its ancestors
    Ensure {
        /// Directory path to materialize
        path: String,
    },

    /// Overwrite a file with zeros and delete it
    Wipe {
        /// File to destroy
        path: PathBuf,

        /// Overwrite chunk size in bytes
        #[arg(short, long, default_value_t = DEFAULT_WIPE_CHUNK)]
        chunk_size: usize,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Copy a file
    Cp {
        /// Source file
        src: PathBuf,

        /// Destination path
        dst: PathBuf,

        /// Overwrite the destination if it exists
        #[arg(short, long)]
        overwrite: bool,
    },

    /// Move a file
    Mv {
        /// Source file
        src: PathBuf,

        /// Destination path
        dst: PathBuf,
    },

    /// Delete a file (without overwriting; see `wipe`)
    Rm {
        /// File to delete
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    // RUST_LOG controls verbosity (e.g. RUST_LOG=info,fileward_ops=debug)
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stat { path } => cmd_stat(&path),
        Commands::Ensure { path } => cmd_ensure(&path),
        Commands::Wipe {
            path,
            chunk_size,
            yes,
        } => cmd_wipe(&path, chunk_size, yes),
        Commands::Cp { src, dst, overwrite } => {
            pathops::copy(&src, &dst, overwrite)
                .with_context(|| format!("copying {} to {}", src.display(), dst.display()))?;
            println!("Copied {} -> {}", src.display(), dst.display());
            Ok(())
        }
        Commands::Mv { src, dst } => {
            pathops::rename(&src, &dst)
                .with_context(|| format!("moving {} to {}", src.display(), dst.display()))?;
            println!("Moved {} -> {}", src.display(), dst.display());
            Ok(())
        }
        Commands::Rm { path } => {
            pathops::remove(&path).with_context(|| format!("deleting {}", path.display()))?;
            println!("Deleted {}", path.display());
            Ok(())
        }
    }
}

fn cmd_stat(path: &Path) -> Result<()> {
    if !pathops::exists(path) {
        println!("{}: does not exist", path.display());
        return Ok(());
    }

    if pathops::is_dir(path) {
        println!("{}: directory", path.display());
        return Ok(());
    }

    let mut handle = FileHandle::open(path, "rb")
        .with_context(|| format!("opening {}", path.display()))?;
    let size = handle.size()?;
    handle.close()?;

    println!("{}: file, {} bytes", path.display(), size);
    Ok(())
}

fn cmd_ensure(path: &str) -> Result<()> {
    ensure(path).with_context(|| format!("creating {}", path))?;
    info!(path, "directory tree ensured");
    println!("Ensured {}", path);
    Ok(())
}

fn cmd_wipe(path: &Path, chunk_size: usize, yes: bool) -> Result<()> {
    if !yes {
        print!(
            "Overwrite and permanently delete {}? [y/N] ",
            path.display()
        );
        io::stdout().flush()?;

        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    let wiper = Wiper::with_options(WipeOptions { chunk_size });
    let result = wiper
        .wipe(path, None)
        .with_context(|| format!("wiping {}", path.display()))?;

    println!(
        "Wiped {}: {} bytes overwritten in {} writes ({:.2?})",
        path.display(),
        result.bytes_overwritten,
        result.chunk_writes,
        result.elapsed
    );
    Ok(())
}
