//! # hotelrs Configuration System
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module loads, merges and validates the hotelrs configuration. It
//! decides where the hotel snapshot lives and, optionally, which rooms a new
//! hotel is seeded with.
//!
//! ## Architecture
//!
//! Configuration sources (in order of precedence):
//! 1. `--data-file` / `HOTELRS_DATA_FILE` (handled by the caller, overrides `storage.data_file` only)
//! 2. Project-specific `.hotelrs.toml` in the current directory or ancestors
//! 3. User-specific `<config dir>/hotelrs/config.toml`
//! 4. Default values defined in the code
//!
//! ## Examples
//!
//! ```toml
//! [storage]
//! data_file = "~/hotel/hotel_data.toml"
//!
//! [[seed.rooms]]
//! id = 201
//! category = "suite"
//! price_per_night = 12000.0
//! ```
//!
//! ```rust
//! let cfg = config::load_config()?;
//! let data_file = PathBuf::from(&cfg.storage.data_file);
//! ```
//!
use crate::booking::model::Category;
use crate::common::fs::io;
use crate::core::error::{HotelError, Result};
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub seed: SeedConfig,
}

/// Where the hotel snapshot is kept.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path of the snapshot file (can use ~). Will be expanded.
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

/// Rooms a brand-new hotel starts with. Empty means the built-in nine-room catalog.
#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SeedConfig {
    #[serde(default)]
    pub rooms: Vec<SeedRoom>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SeedRoom {
    pub id: u32,
    pub category: Category,
    pub price_per_night: f64,
}

fn default_data_file() -> String {
    "hotel_data.toml".to_string()
}

const PROJECT_CONFIG_FILENAME: &str = ".hotelrs.toml";

pub fn load_config() -> Result<Config> {
    let user_config = load_user_config()?;
    let project_config = load_project_config()?;
    let mut merged_config = merge_configs(user_config.unwrap_or_default(), project_config);
    expand_config_paths(&mut merged_config);
    validate_config(&merged_config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", merged_config);
    Ok(merged_config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "hotelrs", "hotelrs") {
        let config_path = proj_dirs.config_dir().join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_project_config() -> Result<Option<Config>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    if let Some(project_config_path) = find_project_config_path(&current_dir) {
        info!(
            "Loading project configuration from: {}",
            project_config_path.display()
        );
        load_config_from_path(&project_config_path).map(Some)
    } else {
        debug!("No project configuration file (.hotelrs.toml) found in current directory or ancestors.");
        Ok(None)
    }
}

/// Walks up from `start` looking for `.hotelrs.toml`, stopping at a `.git` directory.
fn find_project_config_path(start: &Path) -> Option<PathBuf> {
    let mut path = start;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        if project_config.is_file() {
            return Some(project_config);
        }
        if path.join(".git").is_dir() {
            debug!(
                "Found .git directory at {}, stopping project config search.",
                path.display()
            );
            return None;
        }
        path = path.parent()?;
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = io::read_file_to_string(path)?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn merge_configs(user: Config, project: Option<Config>) -> Config {
    let project_cfg = match project {
        Some(p) => p,
        None => return user,
    };
    let mut merged = Config::default();
    merged.storage.data_file = if project_cfg.storage.data_file != default_data_file() {
        project_cfg.storage.data_file
    } else {
        user.storage.data_file
    };
    merged.seed.rooms = if !project_cfg.seed.rooms.is_empty() {
        project_cfg.seed.rooms
    } else {
        user.seed.rooms
    };
    merged
}

fn expand_config_paths(config: &mut Config) {
    config.storage.data_file = shellexpand::tilde(&config.storage.data_file).into_owned();
    debug!("Expanded data file path: {}", config.storage.data_file);
}

fn validate_config(config: &Config) -> Result<()> {
    if config.storage.data_file.trim().is_empty() {
        return Err(anyhow!(HotelError::Config(
            "storage.data_file cannot be empty.".to_string()
        )));
    }
    let data_path = PathBuf::from(&config.storage.data_file);
    if data_path.is_dir() {
        return Err(anyhow!(HotelError::Config(format!(
            "Configured data file '{}' is a directory.",
            data_path.display()
        ))));
    }

    let mut seen = HashSet::new();
    for room in &config.seed.rooms {
        if room.id == 0 {
            return Err(anyhow!(HotelError::Config(
                "Seed room ids must be positive integers.".to_string()
            )));
        }
        if !seen.insert(room.id) {
            return Err(anyhow!(HotelError::Config(format!(
                "Seed room {} is listed more than once.",
                room.id
            ))));
        }
        if !room.price_per_night.is_finite() || room.price_per_night <= 0.0 {
            return Err(anyhow!(HotelError::Config(format!(
                "Seed room {} must have a positive nightly price.",
                room.id
            ))));
        }
    }
    debug!("Configuration validation successful.");
    Ok(())
}
