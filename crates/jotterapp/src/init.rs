//! # Startup
//!
//! [`initialize`] wires a ready-to-use [`JotterContext`] from the working
//! directory:
//!
//! 1. Load [`JotterConfig`] (see [`crate::config`] for the search order).
//! 2. Resolve the notes directory against the working directory.
//! 3. Create the notes directory if it is missing. This is the only place that
//!    creates it; the store itself expects an existing directory.
//! 4. Build the [`FileStore`] and [`JotterApi`] over it.

use crate::api::JotterApi;
use crate::config::JotterConfig;
use crate::error::{JotterError, Result};
use crate::store::FileStore;
use confique::Config;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "jotter.toml";

pub struct JotterContext {
    pub api: JotterApi<FileStore>,
    pub config: JotterConfig,
}

/// Global config file location, if the platform has a config directory.
pub fn global_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "jotter").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

/// Load configuration; earlier files win over later ones.
pub fn load_config(search_paths: &[PathBuf]) -> Result<JotterConfig> {
    let mut builder = JotterConfig::builder();
    for path in search_paths {
        builder = builder.file(path);
    }
    builder
        .load()
        .map_err(|e| JotterError::Config(e.to_string()))
}

/// Config search paths for a working directory, highest priority first.
pub fn config_search_paths(cwd: &Path) -> Vec<PathBuf> {
    let mut paths = vec![cwd.join(CONFIG_FILE)];
    if let Some(global) = global_config_path() {
        paths.push(global);
    }
    paths
}

pub fn initialize(cwd: &Path) -> Result<JotterContext> {
    let config = load_config(&config_search_paths(cwd))?;
    initialize_with(cwd, config)
}

pub fn initialize_with(cwd: &Path, config: JotterConfig) -> Result<JotterContext> {
    let notes_dir = config.notes_dir(cwd);
    if !notes_dir.exists() {
        fs::create_dir_all(&notes_dir).map_err(JotterError::Io)?;
        tracing::info!(dir = %notes_dir.display(), "created notes directory");
    } else if !notes_dir.is_dir() {
        return Err(JotterError::InvalidPath(notes_dir));
    }

    let api = JotterApi::new(FileStore::open(notes_dir));
    Ok(JotterContext { api, config })
}
