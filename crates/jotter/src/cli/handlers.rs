//! Line handling for the shell.
//!
//! [`ShellState`] turns one line of input into a [`Reply`]. Most lines are
//! commands: clap picks the command word (see `setup.rs`) and the text after it
//! is used as typed. Two modes take raw lines instead:
//!
//! - **Composing** (after `body`): every line is appended to the body until a
//!   line holding only `.`.
//! - **Confirming a delete**: the next line answers the `y/N` question. Anything
//!   but `y`/`yes` cancels.
//!
//! Handlers never print. They return rendered strings and let the event loop
//! decide where they go.

use super::render::{
    render_editor, render_error, render_help, render_list, render_messages, render_paths,
    render_root, render_status,
};
use super::setup::{parse_line, ShellCommand, ShellInput};
use super::styles::{Palette, ThemeMode};
use clap::error::ErrorKind;
use jotterapp::api::{CmdResult, TextStats};
use jotterapp::error::Result;
use jotterapp::session::Session;
use jotterapp::store::DataStore;
use std::path::Path;

const END_OF_BODY: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Command,
    Composing,
    ConfirmDelete(String),
}

/// What a line produced.
#[derive(Debug, Default)]
pub struct Reply {
    pub output: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn push(&mut self, text: String) {
        if !text.is_empty() {
            self.output.push(text);
        }
    }

    fn quit() -> Self {
        Self {
            output: Vec::new(),
            quit: true,
        }
    }
}

pub struct ShellState {
    mode: Mode,
    theme: ThemeMode,
}

impl ShellState {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            mode: Mode::Command,
            theme,
        }
    }

    #[cfg(test)]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn prompt(&self) -> &'static str {
        match self.mode {
            Mode::Command => "jotter> ",
            Mode::Composing => "... ",
            Mode::ConfirmDelete(_) => "? ",
        }
    }

    fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn handle_line<S: DataStore>(&mut self, session: &mut Session<S>, line: &str) -> Reply {
        match std::mem::replace(&mut self.mode, Mode::Command) {
            Mode::Composing => self.compose(session, line),
            Mode::ConfirmDelete(title) => self.confirm_delete(session, &title, line),
            Mode::Command => self.command(session, line),
        }
    }

    fn compose<S: DataStore>(&mut self, session: &mut Session<S>, line: &str) -> Reply {
        let mut reply = Reply::default();
        if line.trim_end() == END_OF_BODY {
            let stats = TextStats::of(session.body());
            reply.push(
                self.palette()
                    .info
                    .apply_to(format!("Body set. {}", stats))
                    .to_string(),
            );
        } else {
            session.push_body_line(line);
            self.mode = Mode::Composing;
        }
        reply
    }

    fn confirm_delete<S: DataStore>(
        &mut self,
        session: &mut Session<S>,
        title: &str,
        answer: &str,
    ) -> Reply {
        match answer.trim().to_lowercase().as_str() {
            "y" | "yes" => self.delete(session, title),
            _ => {
                let mut reply = Reply::default();
                reply.push(self.palette().muted.apply_to("Delete cancelled.").to_string());
                reply
            }
        }
    }

    fn command<S: DataStore>(&mut self, session: &mut Session<S>, line: &str) -> Reply {
        let mut reply = Reply::default();
        if line.trim().is_empty() {
            return reply;
        }

        let ShellInput { command, text } = match parse_line(line) {
            Ok(input) => input,
            Err(e) => {
                reply.push(self.parse_error(&e));
                return reply;
            }
        };

        let palette = self.palette();
        match command {
            ShellCommand::List => {
                reply.push(render_list(&session.visible(), session.query(), palette));
            }
            ShellCommand::Search => {
                let visible = session.set_query(text.trim());
                reply.push(render_list(&visible, session.query(), palette));
            }
            ShellCommand::Title => {
                session.set_title(text.trim());
            }
            ShellCommand::Write => {
                session.push_body_line(text);
            }
            ShellCommand::Body => {
                session.set_body("");
                self.mode = Mode::Composing;
                reply.push(
                    palette
                        .muted
                        .apply_to("Type the body; finish with a line holding only \".\".")
                        .to_string(),
                );
            }
            ShellCommand::Show => {
                reply.push(render_editor(session.title(), session.body(), palette));
            }
            ShellCommand::Save => {
                let result = session.save();
                self.report(&mut reply, result);
            }
            ShellCommand::Open => {
                let title = text.trim();
                if title.is_empty() {
                    reply.push(palette.warning.apply_to("Usage: open <name>").to_string());
                    return reply;
                }
                let result = session.open(title);
                if self.report(&mut reply, result) {
                    reply.push(render_editor(session.title(), session.body(), palette));
                }
            }
            ShellCommand::Delete { yes } => {
                let title = self.target(session, text);
                if title.is_empty() {
                    reply.push(palette.warning.apply_to("No note selected.").to_string());
                } else if yes {
                    return self.delete(session, &title);
                } else {
                    reply.push(
                        palette
                            .warning
                            .apply_to(format!("Delete \"{}\"? [y/N]", title))
                            .to_string(),
                    );
                    self.mode = Mode::ConfirmDelete(title);
                }
            }
            ShellCommand::Recover => {
                let title = self.target(session, text);
                let result = session.recover(&title);
                if self.report(&mut reply, result) {
                    reply.push(render_editor(session.title(), session.body(), palette));
                }
            }
            ShellCommand::Clear => {
                session.clear();
                reply.push(palette.info.apply_to(session.status()).to_string());
            }
            ShellCommand::Refresh => match session.refresh() {
                Ok(visible) => reply.push(render_list(&visible, session.query(), palette)),
                Err(e) => reply.push(render_error(&e, palette)),
            },
            ShellCommand::Root => {
                let dir = text.trim();
                if dir.is_empty() {
                    reply.push(render_root(session.api().root(), palette));
                } else {
                    let result = session.change_root(Path::new(dir));
                    if self.report(&mut reply, result) {
                        reply.push(render_list(&session.visible(), session.query(), palette));
                    }
                }
            }
            ShellCommand::Path => {
                let title = session.title().trim().to_string();
                let target = (!title.is_empty()).then_some(title.as_str());
                match session.api().note_paths(target) {
                    Ok(result) => reply.push(render_paths(&result.paths, palette)),
                    Err(e) => reply.push(render_error(&e, palette)),
                }
            }
            ShellCommand::Stats => {
                session.stats();
                reply.push(palette.info.apply_to(session.status()).to_string());
            }
            ShellCommand::Status => {
                let stats = TextStats::of(session.body());
                reply.push(render_status(session.status(), &stats, palette));
            }
            ShellCommand::Theme => {
                self.theme = self.theme.toggled();
                reply.push(
                    self.palette()
                        .info
                        .apply_to(format!("Theme: {}", self.theme.name()))
                        .to_string(),
                );
            }
            ShellCommand::Help => reply.push(render_help(palette)),
            ShellCommand::Quit => return Reply::quit(),
        }
        reply
    }

    fn delete<S: DataStore>(&mut self, session: &mut Session<S>, title: &str) -> Reply {
        let mut reply = Reply::default();
        let result = session.delete(title);
        if self.report(&mut reply, result) {
            reply.push(render_list(
                &session.visible(),
                session.query(),
                self.palette(),
            ));
        }
        reply
    }

    /// Named title, or the one being edited.
    fn target<S: DataStore>(&self, session: &Session<S>, text: &str) -> String {
        match text.trim() {
            "" => session.title().trim().to_string(),
            named => named.to_string(),
        }
    }

    /// Render a command outcome; returns whether it succeeded.
    fn report(&self, reply: &mut Reply, result: Result<CmdResult>) -> bool {
        match result {
            Ok(result) => {
                reply.push(render_messages(&result.messages, self.palette()));
                true
            }
            Err(e) => {
                reply.push(render_error(&e, self.palette()));
                false
            }
        }
    }

    fn parse_error(&self, error: &clap::Error) -> String {
        let palette = self.palette();
        match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.to_string(),
            ErrorKind::InvalidSubcommand => palette
                .warning
                .apply_to("Unknown command. Type `help` to see the commands.")
                .to_string(),
            _ => {
                let text = error.to_string();
                let first = text.lines().next().unwrap_or_default().to_string();
                palette.warning.apply_to(first).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use console::strip_ansi_codes;
    use jotterapp::api::JotterApi;
    use jotterapp::store::InMemoryStore;

    fn setup() -> (ShellState, Session<InMemoryStore>) {
        let session = Session::new(JotterApi::new(InMemoryStore::new()));
        (ShellState::new(ThemeMode::Light), session)
    }

    fn run(state: &mut ShellState, session: &mut Session<InMemoryStore>, line: &str) -> String {
        let reply = state.handle_line(session, line);
        strip_ansi_codes(&reply.output.join("\n")).into_owned()
    }

    #[test]
    fn write_save_and_list() {
        let (mut state, mut session) = setup();
        run(&mut state, &mut session, "title groceries");
        run(&mut state, &mut session, "write milk");
        run(&mut state, &mut session, "write   eggs");
        assert_eq!(run(&mut state, &mut session, "save"), "Note saved: groceries");
        assert_eq!(session.body(), "milk\n  eggs");
        assert_eq!(run(&mut state, &mut session, "ls"), "  groceries");
    }

    #[test]
    fn compose_mode_collects_lines() {
        let (mut state, mut session) = setup();
        session.set_body("old");
        run(&mut state, &mut session, "body");
        assert_eq!(state.mode(), &Mode::Composing);

        run(&mut state, &mut session, "first line");
        run(&mut state, &mut session, "save");
        let out = run(&mut state, &mut session, ".");

        assert_eq!(state.mode(), &Mode::Command);
        assert_eq!(session.body(), "first line\nsave");
        assert!(out.starts_with("Body set."));
    }

    #[test]
    fn delete_asks_first() {
        let (mut state, mut session) = setup();
        session.set_title("todo");
        session.set_body("x");
        session.save().unwrap();

        let out = run(&mut state, &mut session, "delete");
        assert_eq!(out, "Delete \"todo\"? [y/N]");
        assert_eq!(state.mode(), &Mode::ConfirmDelete("todo".into()));

        assert_eq!(run(&mut state, &mut session, "n"), "Delete cancelled.");
        assert_eq!(session.visible().len(), 1);

        run(&mut state, &mut session, "delete todo");
        let out = run(&mut state, &mut session, "Y");
        assert!(out.starts_with("Deleted: todo"));
        assert!(session.visible().is_empty());
    }

    #[test]
    fn delete_yes_skips_prompt() {
        let (mut state, mut session) = setup();
        session.set_title("todo");
        session.set_body("x");
        session.save().unwrap();

        let out = run(&mut state, &mut session, "delete -y todo");
        assert!(out.starts_with("Deleted: todo"));
        assert_eq!(state.mode(), &Mode::Command);
    }

    #[test]
    fn delete_without_target_warns() {
        let (mut state, mut session) = setup();
        assert_eq!(run(&mut state, &mut session, "delete"), "No note selected.");
    }

    #[test]
    fn search_filters_case_insensitively() {
        let (mut state, mut session) = setup();
        for title in ["Meeting", "groceries", "team meeting"] {
            session.set_title(title);
            session.set_body("x");
            session.save().unwrap();
        }

        let out = run(&mut state, &mut session, "search MEET");
        assert_eq!(out, "Notes matching \"MEET\":\n  Meeting\n  team meeting");
        assert_eq!(run(&mut state, &mut session, "search"), "  Meeting\n  groceries\n  team meeting");
    }

    #[test]
    fn open_shows_note() {
        let (mut state, mut session) = setup();
        session.set_title("todo");
        session.set_body("milk");
        session.save().unwrap();
        session.clear();

        let out = run(&mut state, &mut session, "open todo");
        assert!(out.starts_with("Loaded: todo\ntodo\n"));
        assert!(out.ends_with("milk"));
    }

    #[test]
    fn errors_are_reported_not_fatal() {
        let (mut state, mut session) = setup();
        let out = run(&mut state, &mut session, "open ghost");
        assert_eq!(out, "Warning: Note not found: ghost");

        let out = run(&mut state, &mut session, "save");
        assert!(out.starts_with("Warning: Invalid note title"));

        let out = run(&mut state, &mut session, "bogus");
        assert!(out.contains("Unknown command") || out.contains("bogus"));
        assert_eq!(state.mode(), &Mode::Command);
    }

    #[test]
    fn titles_keep_inner_spacing() {
        let (mut state, mut session) = setup();
        run(&mut state, &mut session, "title My  Note");
        assert_eq!(session.title(), "My  Note");
        run(&mut state, &mut session, "write x");
        assert_eq!(run(&mut state, &mut session, "save"), "Note saved: My  Note");
        session.set_title("My Note");
        session.save().unwrap();
        session.clear();

        let out = run(&mut state, &mut session, "search y  N");
        assert_eq!(out, "Notes matching \"y  N\":\n  My  Note");
        run(&mut state, &mut session, "search");

        let out = run(&mut state, &mut session, "open My  Note");
        assert!(out.starts_with("Loaded: My  Note\n"));
        let out = run(&mut state, &mut session, "delete -y My  Note");
        assert_eq!(out, "Deleted: My  Note\n  My Note");
    }

    #[test]
    fn titles_may_start_with_a_dash() {
        let (mut state, mut session) = setup();
        run(&mut state, &mut session, "title -todo");
        run(&mut state, &mut session, "write milk");
        assert_eq!(run(&mut state, &mut session, "save"), "Note saved: -todo");
        session.clear();

        let out = run(&mut state, &mut session, "open -todo");
        assert!(out.starts_with("Loaded: -todo\n"));
        assert!(out.ends_with("milk"));

        let out = run(&mut state, &mut session, "delete -todo");
        assert_eq!(out, "Delete \"-todo\"? [y/N]");
        assert!(run(&mut state, &mut session, "y").starts_with("Deleted: -todo"));
        assert!(session.visible().is_empty());
    }

    #[test]
    fn delete_separator_allows_flag_like_names() {
        let (mut state, mut session) = setup();
        session.set_title("-y");
        session.set_body("x");
        session.save().unwrap();

        let out = run(&mut state, &mut session, "delete -- -y");
        assert_eq!(out, "Delete \"-y\"? [y/N]");
        assert!(run(&mut state, &mut session, "yes").starts_with("Deleted: -y"));
    }

    #[test]
    fn open_without_name_warns() {
        let (mut state, mut session) = setup();
        assert_eq!(run(&mut state, &mut session, "open"), "Usage: open <name>");
        assert_eq!(run(&mut state, &mut session, "open   "), "Usage: open <name>");
    }

    #[test]
    fn root_accepts_paths_with_spaces() {
        let (mut state, mut session) = setup();
        let out = run(&mut state, &mut session, "root /no such  dir");
        assert!(out.starts_with("Warning:"), "{}", out);
        assert!(out.contains("/no such  dir"), "{}", out);
    }

    #[test]
    fn theme_toggles() {
        let (mut state, mut session) = setup();
        assert_eq!(run(&mut state, &mut session, "theme"), "Theme: dark");
        assert_eq!(state.theme(), ThemeMode::Dark);
    }

    #[test]
    fn status_and_stats() {
        let (mut state, mut session) = setup();
        session.set_body("one two three");
        assert_eq!(
            run(&mut state, &mut session, "stats"),
            "Words: 3 | Characters: 13"
        );
        assert_eq!(
            run(&mut state, &mut session, "status"),
            "[Words: 3 | Characters: 13] Words: 3 | Characters: 13"
        );
    }

    #[test]
    fn quit_and_exit() {
        let (mut state, mut session) = setup();
        assert!(state.handle_line(&mut session, "quit").quit);
        assert!(state.handle_line(&mut session, "exit").quit);
        assert!(!state.handle_line(&mut session, "").quit);
    }

    #[test]
    fn path_of_current_note() {
        let (mut state, mut session) = setup();
        let root = session.api().root().display().to_string();
        assert_eq!(run(&mut state, &mut session, "path"), root);

        run(&mut state, &mut session, "title todo");
        let out = run(&mut state, &mut session, "path");
        assert!(out.ends_with("todo.txt"));
    }
}
