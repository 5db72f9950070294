//! # Shell Behavior
//!
//! This is **one possible UI client** for jotter, not the application itself.
//! It is the only place that knows about terminal I/O, exit codes and styling.
//!
//! ## Launch
//!
//! `jotter` takes no required arguments. It loads `jotter.toml`, makes sure the
//! notes directory exists, lists the notes and waits for commands on stdin.
//!
//! ## Editing Model
//!
//! The shell keeps a title and a body buffer. `title` and `write`/`body` fill
//! them, `save` stores them as a note, `open` loads a note into them. While the
//! shell runs, the buffers are auto-saved as a draft every few seconds; drafts
//! are only read back by an explicit `recover`.
//!
//! ## Searching
//!
//! `search <text>` narrows every later listing to notes whose name contains the
//! text, ignoring case. `search` with no text shows everything again.
//!
//! ## Module Structure
//!
//! - `setup`: clap definitions for process args and shell lines
//! - `commands`: startup wiring
//! - `event_loop`: stdin thread and auto-save timer select
//! - `handlers`: line dispatch, compose and confirm modes
//! - `logging`: tracing subscriber
//! - `render`: output formatting
//! - `styles`: light and dark palettes

mod commands;
mod event_loop;
mod handlers;
mod logging;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
