// Base command dispatch
//
// One call fully processes one committed line: tokenize, resolve the
// (case-insensitive) base command, run it against the session. Elevation
// applies to the current line only.

use crate::shell::error::CommandError;
use crate::shell::session::{Session, CLOSE_DELAY, RESTART_DELAY};
use crate::shell::todo;
use crate::shell::transcript::Line;
use crate::shell::gate::ELEVATION_KEYWORD;
use log::debug;

/// Base commands that are really `todo` sub-commands; typing one bare
/// gets a did-you-mean suggestion.
const TODO_ALIASES: &[&str] = &["add", "ls", "list", "check", "rm", "del"];

/// Process one command line. `elevated` is true only when the line was
/// confirmed through the privilege gate (or chained behind `sudo` on an
/// already-elevated line).
pub(crate) fn process(session: &mut Session, line: &str, elevated: bool) {
    let mut tokens = line.split_whitespace();
    let base = tokens.next().unwrap_or("").to_lowercase();
    let rest = tokens.collect::<Vec<_>>().join(" ");

    debug!("process base={:?} elevated={}", base, elevated);

    if base == ELEVATION_KEYWORD {
        handle_sudo(session, &rest, elevated);
        return;
    }

    match base.as_str() {
        "help" => session.transcript.extend(help_lines()),
        "clear" => session.transcript.clear(),
        "reload" => {
            session.transcript.push(Line::system("Reloading system..."));
            session.request_restart(RESTART_DELAY);
        }
        "exit" => handle_exit(session, elevated),
        "todo" => handle_todo(session, &rest, elevated),
        other => {
            session
                .transcript
                .push(Line::error(format!("tosh: command not found: {}", other)));
            if TODO_ALIASES.contains(&other) {
                session
                    .transcript
                    .push(Line::info(format!("Did you mean \"todo {}\"?", other)));
            }
        }
    }
}

/// `sudo <command>`: arm the gate, or chain straight through when the
/// line is already elevated.
fn handle_sudo(session: &mut Session, rest: &str, elevated: bool) {
    if elevated {
        // re-entrant elevation needs no second confirmation
        process(session, rest, true);
        return;
    }

    if rest.is_empty() {
        session.transcript.push(Line::info("usage: sudo <command>"));
        return;
    }

    session.gate.arm(rest.to_string());
    session
        .transcript
        .push(Line::text("[sudo] password for guest: "));
}

fn handle_exit(session: &mut Session, elevated: bool) {
    if !elevated {
        session.transcript.extend(
            CommandError::PermissionDenied {
                message: "System shutdown requires root privileges.".to_string(),
                hint: "Hint: Try \"sudo exit\".".to_string(),
            }
            .into_lines(),
        );
        return;
    }

    session.transcript.push(Line::system("Closing connection..."));
    session.request_close(CLOSE_DELAY);
}

fn handle_todo(session: &mut Session, rest: &str, elevated: bool) {
    let mut tokens = rest.split_whitespace();
    let subcmd = match tokens.next() {
        Some(t) => t.to_lowercase(),
        None => {
            session
                .transcript
                .push(Line::info("Type \"todo help\" to see available commands."));
            return;
        }
    };
    let args = tokens.collect::<Vec<_>>().join(" ");

    let lines = todo::dispatch(&mut session.store, &subcmd, &args, elevated);
    session.transcript.extend(lines);
}

fn help_lines() -> Vec<Line> {
    vec![
        Line::info("System commands:"),
        Line::text("  help                : Show this help message"),
        Line::text("  clear               : Clear terminal screen"),
        Line::text("  reload              : Restart the session"),
        Line::text("  exit                : Close terminal session"),
        Line::Break,
        Line::info("Type \"todo help\" for task management commands."),
    ]
}
