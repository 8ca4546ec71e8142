//! # hotelrs Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! Filesystem helpers shared by the snapshot store and the config loader.
//! Import from the submodule, e.g. `use crate::common::fs::io::read_optional_file;`.

/// Basic file I/O: directory creation, reads with context, atomic writes.
pub mod io;
