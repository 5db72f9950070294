//! # Configuration
//!
//! Jotter configuration is a [`confique`] struct loaded from `jotter.toml`.
//!
//! ## Storage Hierarchy
//!
//! Configuration is resolved in priority order:
//! 1. **Local Config**: `./jotter.toml` in the working directory.
//! 2. **Global Config**: OS-appropriate config directory (via `directories` crate).
//! 3. **Compiled Defaults**: Built-in fallbacks via `#[config(default = ...)]`.
//!
//! Environment variables are not consulted.
//!
//! ## Available Settings
//!
//! | Key | Default | Description |
//! |-----|---------|-------------|
//! | `notes_dir` | `notes` | Notes directory, relative paths resolve against the working directory |
//! | `autosave` | `true` | Periodically write drafts of the note being edited |
//! | `autosave_interval_secs` | `5` | Seconds between draft saves |
//! | `log_level` | `warn` | `tracing` filter directive for stderr logging |

use confique::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Configuration for jotter, stored in `jotter.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct JotterConfig {
    /// Directory holding note and draft files
    #[config(default = "notes")]
    pub notes_dir: String,

    /// Whether drafts are auto-saved
    #[config(default = true)]
    pub autosave: bool,

    /// Seconds between draft saves
    #[config(default = 5)]
    pub autosave_interval_secs: u64,

    /// Log filter, e.g. "warn" or "jotterapp=debug"
    #[config(default = "warn")]
    pub log_level: String,
}

impl Default for JotterConfig {
    fn default() -> Self {
        Self {
            notes_dir: "notes".to_string(),
            autosave: true,
            autosave_interval_secs: 5,
            log_level: "warn".to_string(),
        }
    }
}

impl JotterConfig {
    /// The notes directory, resolved against `cwd` when relative.
    pub fn notes_dir(&self, cwd: &Path) -> PathBuf {
        let dir = PathBuf::from(&self.notes_dir);
        if dir.is_absolute() {
            dir
        } else {
            cwd.join(dir)
        }
    }

    /// Auto-save period, `None` when auto-save is off.
    pub fn autosave_interval(&self) -> Option<Duration> {
        if !self.autosave || self.autosave_interval_secs == 0 {
            return None;
        }
        Some(Duration::from_secs(self.autosave_interval_secs))
    }
}
