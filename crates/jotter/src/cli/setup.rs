use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format for releases: "v0.1.0"
/// Format for dev builds: "v0.1.0\ndev: abc1234 2024-01-15 14:30"
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            format!("v{}", VERSION)
        } else {
            format!("v{}\ndev: {} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(
    name = "jotter",
    bin_name = "jotter",
    version = get_version(),
    about = "Plain-text notes in a directory, with search and draft auto-save",
    long_about = None,
    after_help = "Type `help` inside the shell to see the available commands."
)]
pub struct Cli {
    /// Notes directory, overriding `notes_dir` from jotter.toml
    #[arg(long, value_name = "DIR")]
    pub notes_dir: Option<PathBuf>,

    /// Disable draft auto-save for this run
    #[arg(long)]
    pub no_autosave: bool,
}

/// One line typed into the shell. clap only ever sees the command word and its
/// flags; titles, queries and paths are taken verbatim from the rest of the line
/// (see [`parse_line`]).
#[derive(Parser, Debug)]
#[command(multicall = true, disable_help_subcommand = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ShellCommand {
    /// List notes matching the current search
    #[command(alias = "ls")]
    List,

    /// Filter the list by a case-insensitive substring (no text clears it)
    #[command(override_usage = "search [TEXT]")]
    Search,

    /// Set the title of the note being edited
    #[command(override_usage = "title <TITLE>")]
    Title,

    /// Append one line to the body
    #[command(override_usage = "write <TEXT>")]
    Write,

    /// Replace the body with lines typed until a lone "."
    Body,

    /// Show the title and body being edited
    Show,

    /// Save the body under the current title
    Save,

    /// Load a note into the editor
    #[command(override_usage = "open <NAME>")]
    Open,

    /// Delete a note (defaults to the current title)
    #[command(override_usage = "delete [-y] [--] [NAME]")]
    Delete {
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Load a note's auto-saved draft into the editor
    #[command(override_usage = "recover [NAME]")]
    Recover,

    /// Empty the title and body
    Clear,

    /// Re-read the notes directory
    Refresh,

    /// Show or change the notes directory
    #[command(override_usage = "root [DIR]")]
    Root,

    /// Show the file path of the current note
    Path,

    /// Word and character counts of the body
    Stats,

    /// Show the status line
    Status,

    /// Switch between light and dark colors
    Theme,

    /// List shell commands
    Help,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

impl ShellCommand {
    /// Commands that read the rest of the line as text.
    fn takes_text(&self) -> bool {
        matches!(
            self,
            ShellCommand::Search
                | ShellCommand::Title
                | ShellCommand::Write
                | ShellCommand::Open
                | ShellCommand::Delete { .. }
                | ShellCommand::Recover
                | ShellCommand::Root
        )
    }
}

/// A parsed line: the command and the untouched text that followed it.
#[derive(Debug, PartialEq, Eq)]
pub struct ShellInput<'a> {
    pub command: ShellCommand,
    pub text: &'a str,
}

/// Split off the first word. The rest keeps its spacing, minus the one
/// separator after the word.
pub fn split_command(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(at) => {
            let rest = &line[at..];
            let sep = rest.chars().next().map_or(0, char::len_utf8);
            (&line[..at], &rest[sep..])
        }
        None => (line, ""),
    }
}

/// Move leading `-y`/`--yes` into `args`. A `--` ends the flags, so a note
/// whose name starts with `-` can still be named.
fn take_delete_flags<'a>(mut rest: &'a str, args: &mut Vec<&'a str>) -> &'a str {
    loop {
        let (token, after) = split_command(rest);
        match token {
            "-y" | "--yes" => {
                args.push(token);
                rest = after;
            }
            "--" => return after,
            _ => return rest,
        }
    }
}

pub fn parse_line(line: &str) -> Result<ShellInput<'_>, clap::Error> {
    let (word, rest) = split_command(line);
    let mut args = vec![word];
    let mut text = rest;

    if matches!(rest.trim(), "-h" | "--help") {
        args.push(rest.trim());
        text = "";
    } else if word == "delete" {
        text = take_delete_flags(rest, &mut args);
    }

    let command = ShellLine::try_parse_from(args)?.command;
    if !command.takes_text() && !text.trim().is_empty() {
        // Let clap report the stray words
        ShellLine::try_parse_from(line.split_whitespace())?;
    }
    Ok(ShellInput { command, text })
}
