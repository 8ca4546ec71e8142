//! # hotelrs CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`booking.rs`, `menu.rs`, ...).
//! Every command runs inside its own temporary directory with its own data
//! file, so tests never see each other's reservations or any real config.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scratch directory holding one hotel snapshot file.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    /// A fresh sandbox. Its `.git` marker stops the project config search at
    /// the sandbox root.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
        Self { dir }
    }

    pub fn data_file(&self) -> PathBuf {
        self.dir.path().join("hotel.toml")
    }

    /// `hotelrs` running inside the sandbox, with `HOME` and
    /// `XDG_CONFIG_HOME` pointing at it so no real user config is read.
    pub fn bare_cmd(&self) -> Command {
        let mut cmd = hotelrs_cmd();
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path())
            .env_remove("HOTELRS_DATA_FILE")
            .env_remove("RUST_LOG");
        cmd
    }

    /// `bare_cmd` with `--data-file` pointing into this sandbox.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare_cmd();
        cmd.arg("--data-file").arg(self.data_file());
        cmd
    }

    /// Books a room and returns the new reservation id parsed from stdout.
    pub fn book(&self, guest: &str, room: u32, from: &str, to: &str) -> String {
        let room = room.to_string();
        let output = self
            .cmd()
            .args(["book", "--guest", guest, "--room", room.as_str()])
            .args(["--from", from, "--to", to])
            .output()
            .expect("Failed to run hotelrs book");
        assert!(output.status.success(), "book failed: {:?}", output);
        let stdout = String::from_utf8(output.stdout).expect("stdout is not UTF-8");
        reservation_id(&stdout).expect("No reservation id in book output")
    }
}

/// Extracts the id from a `Reservation <id> | ...` line.
pub fn reservation_id(text: &str) -> Option<String> {
    let start = text.find("Reservation ")? + "Reservation ".len();
    let rest = &text[start..];
    let end = rest.find(' ')?;
    Some(rest[..end].to_string())
}

/// # Get hotelrs Command (`hotelrs_cmd`)
///
/// An `assert_cmd::Command` for the compiled `hotelrs` binary of this test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn hotelrs_cmd() -> Command {
    Command::cargo_bin("hotelrs").expect("Failed to find hotelrs binary for testing")
}
