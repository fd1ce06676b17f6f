// Command error taxonomy
//
// Every failure inside the dispatcher is recoverable and surfaces as
// transcript lines; nothing propagates past the dispatch boundary. The
// handlers return `Result<Vec<Line>, CommandError>` and the dispatcher
// renders the error side via `into_lines`.

use crate::shell::transcript::Line;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("Error: Please provide a task description.")]
    MissingDescription,

    /// `add` arguments consisted only of flags
    #[error("Error: Task text is missing.")]
    MissingTaskText,

    #[error("Error: Please provide a valid ID.")]
    InvalidTaskId,

    #[error("Error: Task [ID:{0}] not found.")]
    TaskNotFound(i64),

    #[error("Usage: todo priority <ID> <high|medium|low>")]
    PriorityUsage,

    #[error("Usage: todo due <ID> <YYYY-MM-DD> [HH:MM]")]
    DueUsage,

    /// Elevation-gated command attempted without elevation; carries the
    /// hint suggesting the sudo form
    #[error("Permission denied: {message}")]
    PermissionDenied { message: String, hint: String },

    #[error("todo: '{0}' is not a todo command. See 'todo help'.")]
    UnknownTodoCommand(String),
}

impl CommandError {
    /// Render this error as its transcript lines. Permission errors emit
    /// the error plus an info hint; everything else is a single error
    /// line.
    pub fn into_lines(self) -> Vec<Line> {
        match self {
            CommandError::PermissionDenied { ref hint, .. } => {
                let hint = hint.clone();
                vec![Line::error(self.to_string()), Line::info(hint)]
            }
            other => vec![Line::error(other.to_string())],
        }
    }
}
