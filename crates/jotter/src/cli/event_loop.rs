//! The shell's single event loop.
//!
//! Stdin is read on a helper thread that only forwards lines over a channel. The
//! loop owns the session and waits on two sources at once: input lines and the
//! auto-save timer. A tick snapshots the buffers and writes the draft right
//! here, so the session is never shared across threads.
//!
//! The loop ends on `quit` or when stdin closes; dropping the timer with it
//! stops auto-save.

use super::handlers::ShellState;
use crossbeam_channel::{select, unbounded, Receiver};
use jotterapp::autosave::AutoSaveTimer;
use jotterapp::session::Session;
use jotterapp::store::DataStore;
use std::io::{self, BufRead, Write};
use std::thread;

/// Forward stdin lines until EOF, a read error, or the loop going away.
pub fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "stopped reading stdin");
                    break;
                }
            }
        }
    });
    rx
}

pub fn run<S: DataStore, W: Write>(
    state: &mut ShellState,
    session: &mut Session<S>,
    input: &Receiver<String>,
    timer: &AutoSaveTimer,
    out: &mut W,
    interactive: bool,
) -> io::Result<()> {
    let mut show_prompt = true;
    loop {
        if interactive && show_prompt {
            write!(out, "{}", state.prompt())?;
            out.flush()?;
        }

        select! {
            recv(input) -> line => {
                let Ok(line) = line else {
                    tracing::debug!("input closed");
                    break;
                };
                let reply = state.handle_line(session, &line);
                for text in &reply.output {
                    writeln!(out, "{}", text)?;
                }
                out.flush()?;
                if reply.quit {
                    break;
                }
                show_prompt = true;
            }
            recv(timer.ticks()) -> _ => {
                let outcome = session.autosave_tick();
                tracing::debug!(?outcome, "auto-save tick");
                show_prompt = false;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::styles::ThemeMode;
    use jotterapp::api::JotterApi;
    use jotterapp::store::InMemoryStore;
    use std::time::Duration;

    fn session() -> Session<InMemoryStore> {
        Session::new(JotterApi::new(InMemoryStore::new()))
    }

    fn feed(lines: &[&str]) -> Receiver<String> {
        let (tx, rx) = unbounded();
        for line in lines {
            tx.send(line.to_string()).unwrap();
        }
        rx
    }

    #[test]
    fn runs_until_input_closes() {
        let mut state = ShellState::new(ThemeMode::Light);
        let mut session = session();
        let input = feed(&["title todo", "write milk", "save", "ls"]);
        let mut out = Vec::new();

        run(
            &mut state,
            &mut session,
            &input,
            &AutoSaveTimer::disabled(),
            &mut out,
            false,
        )
        .unwrap();

        let text = console::strip_ansi_codes(&String::from_utf8(out).unwrap()).into_owned();
        assert_eq!(text, "Note saved: todo\n  todo\n");
    }

    #[test]
    fn quit_stops_before_remaining_input() {
        let mut state = ShellState::new(ThemeMode::Light);
        let mut session = session();
        let input = feed(&["quit", "title never"]);
        let mut out = Vec::new();

        run(
            &mut state,
            &mut session,
            &input,
            &AutoSaveTimer::disabled(),
            &mut out,
            false,
        )
        .unwrap();
        assert_eq!(session.title(), "");
    }

    #[test]
    fn ticks_write_drafts() {
        let mut state = ShellState::new(ThemeMode::Light);
        let mut session = session();
        let (tx, input) = unbounded();
        tx.send("title todo".to_string()).unwrap();
        tx.send("write unsaved".to_string()).unwrap();
        let sender = thread::spawn(move || {
            thread::sleep(Duration::from_millis(200));
            tx.send("quit".to_string()).unwrap();
        });
        let mut out = Vec::new();

        run(
            &mut state,
            &mut session,
            &input,
            &AutoSaveTimer::every(Duration::from_millis(10)),
            &mut out,
            false,
        )
        .unwrap();
        sender.join().unwrap();

        assert_eq!(session.api().store().load_draft("todo").unwrap(), "unsaved");
        assert!(session.status().starts_with("Auto-saved draft."));
        // Drafts never show up as notes
        assert!(session.refresh().unwrap().is_empty());
    }
}
