//! # Jotter Shell
//!
//! The binary is thin: everything lives in `src/cli/`, and this file only calls
//! `cli::run()` and turns a failure into an exit code.
//!
//! ## Workspace Structure
//!
//! - `crates/jotterapp/`: UI-agnostic library (store, search, session, auto-save)
//! - `crates/jotter/`: this interactive shell
//!
//! ## Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Shell Layer (crates/jotter/src/cli/)                       │
//! │  - clap parsing of process args and shell lines (setup.rs)  │
//! │  - Input thread + auto-save timer select (event_loop.rs)    │
//! │  - Command dispatch and modes (handlers.rs)                 │
//! │  - Styled output (render.rs, styles.rs)                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (crates/jotterapp/src/session.rs)                  │
//! │  - Editing buffers, query, status line                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API + Commands + Store (crates/jotterapp/src/)             │
//! │  - No knowledge of stdout/stderr or process exits           │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testing Approach
//!
//! - **Handlers**: drive `ShellState` with text lines over an in-memory store and
//!   assert on the rendered output with ANSI codes stripped.
//! - **Rendering**: feed canned values, compare plain text.
//! - **End to end**: `tests/` runs the binary with scripted stdin in a temporary
//!   working directory.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
