//! # Jotter Architecture
//!
//! Jotter is a **UI-agnostic note-taking library**: notes are plain-text files in
//! a directory, one file per note, with a periodically auto-saved draft next to
//! the note being edited. The `jotter` binary is one client of this library.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI client (the jotter shell, or anything else)             │
//! │  - Owns the event loop, input and rendering                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session (session.rs) + AutoSaveTimer (autosave.rs)         │
//! │  - Editing buffers, query, cached index, status line        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns `Result<CmdResult>`   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + Index (index.rs)           │
//! │  - One module per operation, pure search filter             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait, NoteStore over Fs/Mem backends          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! Nothing in this crate writes to stdout/stderr, exits the process or assumes a
//! terminal. Diagnostics go through `tracing`; installing a subscriber is the
//! client's call.
//!
//! ## Testing Strategy
//!
//! - **Commands and store**: unit tests against `InMemoryStore`.
//! - **Filesystem behavior**: integration tests in `tests/` against `FileStore`
//!   in temporary directories.
//! - **Session**: unit tests driving it the way a UI would.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`autosave`]: Draft timer and snapshots
//! - [`commands`]: Business logic for each operation
//! - [`config`]: Configuration
//! - [`error`]: Error types
//! - [`index`]: Identifier list and search filter
//! - [`init`]: Startup wiring
//! - [`model`]: `NoteId`, `Note` and naming rules
//! - [`session`]: Editing session state
//! - [`store`]: Storage abstraction and implementations

pub mod api;
pub mod autosave;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod init;
pub mod model;
pub mod session;
pub mod store;
