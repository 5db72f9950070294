//! # Draft Auto-Save
//!
//! Auto-save is a repeating timer that the UI's own event loop waits on, next to
//! its input source. When it fires, the loop takes a [`DraftSnapshot`] of the
//! editing buffers and hands it to the store. The timer never touches UI state
//! itself, and since the loop is single-threaded no locking is involved.
//!
//! ```no_run
//! use crossbeam_channel::select;
//! use jotterapp::autosave::AutoSaveTimer;
//! use std::time::Duration;
//!
//! let (_tx, input) = crossbeam_channel::unbounded::<String>();
//! let timer = AutoSaveTimer::every(Duration::from_secs(5));
//! loop {
//!     select! {
//!         recv(input) -> line => { if line.is_err() { break } }
//!         recv(timer.ticks()) -> _ => { /* session.autosave_tick() */ }
//!     }
//! }
//! ```
//!
//! Dropping the timer stops it.

use crossbeam_channel::{never, tick, Receiver};
use std::time::{Duration, Instant};

/// Immutable copy of the editing buffers at one instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftSnapshot {
    pub title: String,
    pub body: String,
}

impl DraftSnapshot {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Repeating timer delivered as a channel.
pub struct AutoSaveTimer {
    ticks: Receiver<Instant>,
}

impl AutoSaveTimer {
    pub fn every(interval: Duration) -> Self {
        Self {
            ticks: tick(interval),
        }
    }

    /// A timer that never fires.
    pub fn disabled() -> Self {
        Self { ticks: never() }
    }

    pub fn from_interval(interval: Option<Duration>) -> Self {
        match interval {
            Some(interval) => Self::every(interval),
            None => Self::disabled(),
        }
    }

    pub fn ticks(&self) -> &Receiver<Instant> {
        &self.ticks
    }
}
