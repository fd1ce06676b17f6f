// Transcript: the append-only log of structured output records
//
// The interpreter only ever appends. The single exception is the `clear`
// command, which replaces the whole log with the empty sequence; hosts
// detect that by the length shrinking below their render cursor.

use crate::models::Task;
use serde::Serialize;

/// One output record, tagged by kind.
///
/// Serialized adjacently tagged (`{"kind": ..., "data": ...}`) so a host
/// speaking the JSON protocol gets one self-describing record per line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Line {
    /// Echo of a submitted command line
    Command(String),
    System(String),
    Info(String),
    Success(String),
    Error(String),
    /// Plain body text, e.g. help entries or table separators
    Text(String),
    /// One task row in a listing; carries a copy of the task
    Task(Task),
    /// Vertical spacer
    Break,
}

impl Line {
    pub fn command(s: impl Into<String>) -> Self {
        Line::Command(s.into())
    }

    pub fn system(s: impl Into<String>) -> Self {
        Line::System(s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        Line::Info(s.into())
    }

    pub fn success(s: impl Into<String>) -> Self {
        Line::Success(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Line::Error(s.into())
    }

    pub fn text(s: impl Into<String>) -> Self {
        Line::Text(s.into())
    }
}

/// Append-only ordered log of output lines
#[derive(Debug, Default)]
pub struct Transcript {
    lines: Vec<Line>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = Line>) {
        self.lines.extend(lines);
    }

    /// Replace the transcript with the empty sequence (the `clear` screen
    /// action)
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
