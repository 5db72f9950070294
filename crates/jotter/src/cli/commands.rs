//! # Shell Startup
//!
//! The shell is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs a tracing subscriber
//! - Handles argument parsing
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: process args via clap
//! 2. **Context Setup**: load config, apply overrides, open the notes directory
//! 3. **Event Loop**: hand the session to the loop until quit or EOF

use super::event_loop::{self, spawn_stdin_reader};
use super::handlers::ShellState;
use super::logging;
use super::render::{render_error, render_list, render_root};
use super::setup::Cli;
use super::styles::ThemeMode;
use anyhow::{Context, Result};
use clap::Parser;
use jotterapp::autosave::AutoSaveTimer;
use jotterapp::config::JotterConfig;
use jotterapp::init::{config_search_paths, initialize_with, load_config};
use jotterapp::session::Session;
use std::io::{self, IsTerminal, Write};

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir().context("cannot determine the working directory")?;
    let mut config = load_config(&config_search_paths(&cwd))?;
    apply_overrides(&cli, &mut config);
    logging::init(&config.log_level);

    let ctx = initialize_with(&cwd, config)?;
    tracing::debug!(root = %ctx.api.root().display(), "notes directory ready");

    let timer = AutoSaveTimer::from_interval(ctx.config.autosave_interval());
    let mut session = Session::new(ctx.api);
    let mut state = ShellState::new(ThemeMode::detect());
    let interactive = io::stdin().is_terminal();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let palette = state.theme().palette();
    if interactive {
        writeln!(out, "{}", render_root(session.api().root(), palette))?;
    }
    match session.refresh() {
        Ok(visible) => writeln!(out, "{}", render_list(&visible, session.query(), palette))?,
        Err(e) => writeln!(out, "{}", render_error(&e, palette))?,
    }

    let input = spawn_stdin_reader();
    event_loop::run(&mut state, &mut session, &input, &timer, &mut out, interactive)?;
    Ok(())
}

fn apply_overrides(cli: &Cli, config: &mut JotterConfig) {
    if let Some(dir) = &cli.notes_dir {
        config.notes_dir = dir.to_string_lossy().into_owned();
    }
    if cli.no_autosave {
        config.autosave = false;
    }
}
