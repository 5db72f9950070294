//! Output formatting. Every function returns a string; printing is the event
//! loop's job.

use super::styles::Palette;
use jotterapp::api::{CmdMessage, MessageLevel, TextStats};
use jotterapp::error::JotterError;
use jotterapp::model::NoteId;
use std::path::{Path, PathBuf};

const RULE: &str = "--------------------------------";

pub const HELP: &[(&str, &str)] = &[
    ("list, ls", "List notes matching the current search"),
    ("search [text]", "Filter notes by name; no text clears the filter"),
    ("title <text>", "Set the title of the note being edited"),
    ("write <text>", "Append one line to the body"),
    ("body", "Replace the body with lines typed until a lone \".\""),
    ("show", "Show the title and body being edited"),
    ("save", "Save the body under the current title"),
    ("open <name>", "Load a note into the editor"),
    ("delete [-y] [--] [name]", "Delete a note (asks first unless -y)"),
    ("recover [name]", "Load a note's auto-saved draft"),
    ("clear", "Empty the title and body"),
    ("refresh", "Re-read the notes directory"),
    ("root [dir]", "Show or change the notes directory"),
    ("path", "Show the file path of the current note"),
    ("stats", "Word and character counts of the body"),
    ("status", "Show the status line"),
    ("theme", "Switch between light and dark colors"),
    ("help", "Show this list"),
    ("quit, exit", "Leave the shell"),
];

pub fn render_messages(messages: &[CmdMessage], palette: &Palette) -> String {
    messages
        .iter()
        .map(|message| {
            let style = match message.level {
                MessageLevel::Info => &palette.info,
                MessageLevel::Success => &palette.success,
                MessageLevel::Warning => &palette.warning,
                MessageLevel::Error => &palette.error,
            };
            style.apply_to(&message.content).to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_error(error: &JotterError, palette: &Palette) -> String {
    render_messages(&[CmdMessage::from_error(error)], palette)
}

pub fn render_list(ids: &[NoteId], query: &str, palette: &Palette) -> String {
    if ids.is_empty() {
        let empty = if query.is_empty() {
            "No notes found.".to_string()
        } else {
            format!("No notes match \"{}\".", query)
        };
        return palette.muted.apply_to(empty).to_string();
    }

    let mut out = Vec::with_capacity(ids.len() + 1);
    if !query.is_empty() {
        out.push(
            palette
                .muted
                .apply_to(format!("Notes matching \"{}\":", query))
                .to_string(),
        );
    }
    for id in ids {
        out.push(format!("  {}", palette.list_title.apply_to(id.name())));
    }
    out.join("\n")
}

pub fn render_editor(title: &str, body: &str, palette: &Palette) -> String {
    let title = if title.trim().is_empty() {
        palette.muted.apply_to("(untitled)".to_string())
    } else {
        palette.title.apply_to(title.to_string())
    };
    let body = if body.is_empty() {
        palette.muted.apply_to("(empty)".to_string())
    } else {
        palette.regular.apply_to(body.to_string())
    };
    format!("{}\n{}\n{}", title, palette.muted.apply_to(RULE), body)
}

pub fn render_status(status: &str, stats: &TextStats, palette: &Palette) -> String {
    palette
        .status
        .apply_to(format!("[{}] {}", status, stats))
        .to_string()
}

pub fn render_root(root: &Path, palette: &Palette) -> String {
    format!(
        "{} {}",
        palette.muted.apply_to("Notes directory:"),
        palette.regular.apply_to(root.display())
    )
}

pub fn render_paths(paths: &[PathBuf], palette: &Palette) -> String {
    paths
        .iter()
        .map(|path| palette.regular.apply_to(path.display()).to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_help(palette: &Palette) -> String {
    let width = HELP.iter().map(|(cmd, _)| cmd.len()).max().unwrap_or(0);
    HELP.iter()
        .map(|(cmd, desc)| {
            format!(
                "  {}  {}",
                palette.help_command.apply_to(format!("{:<width$}", cmd)),
                palette.help_desc.apply_to(desc)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
