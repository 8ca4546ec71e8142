//! # hotelrs Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small wrappers around `std::fs` used by the snapshot store and the config
//! loader. They attach the offending path to every error via
//! `anyhow::Context`, so a failed load or save reports which file was involved.
//!
//! ## Architecture
//!
//! - **`ensure_dir_exists`**: Creates a directory (and parents) if missing; fails if the path is a file.
//! - **`read_file_to_string`**: Reads a whole file, with context on failure.
//! - **`read_optional_file`**: Like `read_file_to_string` but maps "not found" to `Ok(None)`.
//! - **`write_string_atomically`**: Writes to a sibling temporary file and renames it over the target, so readers
//!   never observe a half-written snapshot.
//!
use crate::core::error::{HotelError, Result};
use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path, creating it (like `mkdir -p`) if needed.
///
/// # Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if creation fails.
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(HotelError::Storage(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Reads a file, returning `Ok(None)` when it does not exist.
pub fn read_optional_file(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("File not found: {:?}", path);
            Ok(None)
        }
        Err(e) => Err(e).with_context(|| format!("Failed to read file {:?}", path)),
    }
}

/// Writes `content` to `path`, replacing any existing file in a single rename.
///
/// The parent directory is created if needed. The temporary file lives next to
/// the target so the rename never crosses filesystems.
pub fn write_string_atomically(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir_exists(parent)?;
    }

    let temp_path = temp_sibling(path);
    fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write temporary file {:?}", temp_path))?;
    if let Err(e) = fs::rename(&temp_path, path) {
        // Best effort; the rename error is the one reported.
        let _ = fs::remove_file(&temp_path);
        return Err(e)
            .with_context(|| format!("Failed to move {:?} into place at {:?}", temp_path, path));
    }
    info!("Wrote file: {:?}", path);
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| "snapshot".into());
    name.push(".tmp");
    path.with_file_name(name)
}
