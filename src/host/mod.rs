// Interactive host: the collaborator that owns the real terminal
//
// The host renders transcript records, feeds committed lines to the
// session, and services the delayed restart/close signals. All visual
// decisions live here; the shell core knows nothing about ANSI, prompts
// or timing.

pub mod render;

use crate::config::Config;
use crate::shell::gate::InputEcho;
use crate::shell::session::{HostSignal, Session};
use crate::shell::transcript::Line;
use crate::store::TaskStore;
use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(name = "tosh")]
#[command(about = "An emulated terminal shell around an in-memory todo list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// Suppress the startup banner
    #[arg(long)]
    pub no_banner: bool,

    /// Start with an empty task list instead of the demo tasks
    #[arg(long)]
    pub empty: bool,

    /// Disable ANSI colors
    #[arg(long)]
    pub plain: bool,

    /// Emit transcript records as JSON objects, one per line
    #[arg(long)]
    pub json: bool,
}

/// Entry point for the `tosh` binary
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    // no-op outside Windows
    let _ = enable_ansi_support::enable_ansi_support();

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    run_loop(&cli, &config, &mut input, &mut std::io::stdout())
}

fn fresh_session(cli: &Cli, config: &Config) -> Session {
    let store = if cli.empty || !config.seed {
        TaskStore::new()
    } else {
        TaskStore::seeded()
    };
    let mut session = Session::new(store);
    if config.banner && !cli.no_banner {
        session.append(banner_lines());
    }
    session
}

fn banner_lines() -> Vec<Line> {
    vec![
        Line::system(format!("tosh [Version {}]", env!("CARGO_PKG_VERSION"))),
        Line::system("(c) Tosh Project. All rights reserved."),
        Line::info("Type \"help\" for system commands."),
        Line::info("Type \"todo help\" for task commands."),
        Line::Break,
    ]
}

fn run_loop(
    cli: &Cli,
    config: &Config,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let color = config.color && !cli.plain && render::is_tty();
    let mut session = fresh_session(cli, config);
    let mut cursor = 0usize;

    info!("session started ({} tasks)", session.store().len());

    loop {
        cursor = flush_new_lines(&session, cursor, cli, config, color, out)?;

        match session.input_echo() {
            InputEcho::Normal => {
                if !cli.json {
                    write!(out, "{} ", config.prompt)?;
                    out.flush()?;
                }
            }
            // Confirmation pending: the password prompt is already in the
            // transcript and the typed secret must not be echoed back.
            InputEcho::Hidden => {}
        }

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("stdin closed, leaving session");
            return Ok(());
        }

        session.submit(&line);
        cursor = flush_new_lines(&session, cursor, cli, config, color, out)?;

        while let Some(effect) = session.take_effect() {
            debug!("host effect {:?} after {:?}", effect.signal, effect.delay);
            std::thread::sleep(effect.delay);
            match effect.signal {
                HostSignal::Restart => {
                    if color {
                        write!(out, "{}", render::ANSI_CLEAR_SCREEN)?;
                    }
                    session = fresh_session(cli, config);
                    cursor = 0;
                }
                HostSignal::Close => {
                    writeln!(out, "Process terminated. Connection to guest@tosh closed.")?;
                    return Ok(());
                }
            }
        }
    }
}

/// Print every transcript line the host has not rendered yet; returns the
/// new cursor. A transcript shorter than the cursor means the screen was
/// cleared.
fn flush_new_lines(
    session: &Session,
    cursor: usize,
    cli: &Cli,
    config: &Config,
    color: bool,
    out: &mut impl Write,
) -> Result<usize> {
    let lines = session.transcript().lines();

    let start = if lines.len() < cursor {
        if color {
            write!(out, "{}", render::ANSI_CLEAR_SCREEN)?;
        }
        0
    } else {
        cursor
    };

    for line in &lines[start..] {
        if cli.json {
            writeln!(out, "{}", serde_json::to_string(line)?)?;
        } else {
            writeln!(out, "{}", render::render_line(line, &config.prompt, color))?;
        }
    }
    out.flush()?;
    Ok(lines.len())
}
