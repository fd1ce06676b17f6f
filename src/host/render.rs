// Terminal rendering of transcript lines
//
// Strictly presentation: consumes `Line` records and produces styled
// strings. The interpreter never sees any of this.

use crate::models::{Priority, Task};
use crate::shell::transcript::Line;
use std::io::IsTerminal;

// ANSI escape codes for terminal formatting
const ANSI_BOLD: &str = "\x1b[1m";
const ANSI_DIM: &str = "\x1b[2m";
const ANSI_STRIKE: &str = "\x1b[9m";
const ANSI_RESET: &str = "\x1b[0m";

const ANSI_FG_RED: &str = "\x1b[31m";
const ANSI_FG_GREEN: &str = "\x1b[32m";
const ANSI_FG_YELLOW: &str = "\x1b[33m";
const ANSI_FG_BLUE: &str = "\x1b[34m";
const ANSI_FG_BRIGHT_BLACK: &str = "\x1b[90m";

/// Clear screen and home the cursor (the `clear` command's visual effect)
pub const ANSI_CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Check if stdout is a terminal (TTY)
pub fn is_tty() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width dynamically
///
/// Uses the `terminal_size` crate for reliable detection, with fallback to
/// the COLUMNS environment variable and a sensible default.
pub fn get_terminal_width() -> usize {
    if let Some((terminal_size::Width(w), _)) = terminal_size::terminal_size() {
        if w > 0 {
            return w as usize;
        }
    }

    if let Ok(cols) = std::env::var("COLUMNS") {
        if let Ok(width) = cols.parse::<usize>() {
            if width > 0 && width < 10000 {
                return width;
            }
        }
    }

    120
}

fn paint(text: &str, codes: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", codes, text, ANSI_RESET)
    } else {
        text.to_string()
    }
}

fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::High => ANSI_FG_RED,
        Priority::Medium => ANSI_FG_YELLOW,
        Priority::Low => ANSI_FG_BLUE,
    }
}

/// Render one transcript line as a styled terminal row
pub fn render_line(line: &Line, prompt: &str, color: bool) -> String {
    match line {
        Line::Command(content) => {
            let prompt = paint(prompt, &format!("{}{}", ANSI_BOLD, ANSI_FG_GREEN), color);
            if content.is_empty() {
                prompt
            } else {
                format!("{} {}", prompt, content)
            }
        }
        Line::System(content) => paint(content, ANSI_FG_BRIGHT_BLACK, color),
        Line::Info(content) => paint(content, &format!("{}{}", ANSI_BOLD, ANSI_FG_BLUE), color),
        Line::Success(content) => paint(content, ANSI_FG_GREEN, color),
        Line::Error(content) => paint(content, ANSI_FG_RED, color),
        Line::Text(content) => content.clone(),
        Line::Task(task) => render_task_row(task, color),
        Line::Break => String::new(),
    }
}

/// One listing row, aligned under the `ID | STS | PRI | DUE | TASK` header
fn render_task_row(task: &Task, color: bool) -> String {
    let id = format!("[{}]", task.id);
    let status = if task.completed { "DONE" } else { "TODO" };
    let status_color = if task.completed {
        ANSI_FG_GREEN
    } else {
        ANSI_FG_RED
    };
    let pri = task.priority.as_str()[..3].to_uppercase();
    let due = task.due_date.as_deref().unwrap_or("----------");

    // Plain-text cell widths first; color codes would throw off padding.
    let prefix = format!("{:<4}| {:<5}| {:<5}| {:<17}| ", id, status, pri, due);
    let text = truncate(&task.text, get_terminal_width().saturating_sub(prefix.len()));

    if !color {
        return format!("{}{}", prefix, text);
    }

    let text_style = if task.completed {
        format!("{}{}", ANSI_DIM, ANSI_STRIKE)
    } else {
        String::new()
    };
    format!(
        "{}| {}| {}| {}| {}{}{}",
        paint_cell(&id, ANSI_FG_YELLOW, 4),
        paint_cell(status, status_color, 5),
        paint_cell(&pri, priority_color(task.priority), 5),
        paint_cell(due, ANSI_FG_BRIGHT_BLACK, 17),
        text_style,
        text,
        ANSI_RESET,
    )
}

/// Pad to `width` before wrapping in color codes, so alignment survives
fn paint_cell(text: &str, codes: &str, width: usize) -> String {
    format!("{}{:<width$}{}", codes, text, ANSI_RESET, width = width)
}

fn truncate(text: &str, max: usize) -> String {
    if max < 4 || text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max - 2).collect();
    format!("{}..", kept)
}
