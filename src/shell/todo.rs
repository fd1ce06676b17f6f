// The `todo` command family
//
// Each handler is a pure function over the store: it returns either the
// lines to append (plus any mutation already applied) or a CommandError
// the dispatcher renders. Nothing here touches the transcript directly.

use crate::models::Priority;
use crate::shell::error::CommandError;
use crate::shell::parser::{parse_list_args, parse_task_args, SortKey};
use crate::shell::transcript::Line;
use crate::store::TaskStore;
use crate::utils::date::parse_due;
use log::debug;
use std::cmp::Ordering;

const LIST_HEADER: &str = "ID  | STS  | PRI  | DUE              | TASK";
const LIST_SEPARATOR: &str = "------------------------------------------------------";

/// Closed set of todo sub-commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TodoCommand {
    Help,
    List,
    Add,
    Toggle,
    Priority,
    Due,
    Remove,
    Clear,
}

impl TodoCommand {
    /// Resolve a (lowercased) sub-command token, including aliases
    fn parse(s: &str) -> Option<Self> {
        match s {
            "help" => Some(TodoCommand::Help),
            "ls" | "list" => Some(TodoCommand::List),
            "add" => Some(TodoCommand::Add),
            "check" | "toggle" => Some(TodoCommand::Toggle),
            "priority" | "p" => Some(TodoCommand::Priority),
            "due" => Some(TodoCommand::Due),
            "rm" | "delete" => Some(TodoCommand::Remove),
            "clear" => Some(TodoCommand::Clear),
            _ => None,
        }
    }
}

/// Route a todo sub-command to its handler and render any error into
/// transcript lines.
pub fn dispatch(store: &mut TaskStore, subcmd: &str, args: &str, elevated: bool) -> Vec<Line> {
    debug!("todo dispatch: {:?} args={:?} elevated={}", subcmd, args, elevated);
    let result = match TodoCommand::parse(subcmd) {
        Some(TodoCommand::Help) => Ok(help_lines()),
        Some(TodoCommand::List) => handle_list(store, args),
        Some(TodoCommand::Add) => handle_add(store, args),
        Some(TodoCommand::Toggle) => handle_toggle(store, args),
        Some(TodoCommand::Priority) => handle_priority(store, args),
        Some(TodoCommand::Due) => handle_due(store, args),
        Some(TodoCommand::Remove) => handle_remove(store, args),
        Some(TodoCommand::Clear) => handle_clear(store, elevated),
        None => Err(CommandError::UnknownTodoCommand(subcmd.to_string())),
    };
    result.unwrap_or_else(CommandError::into_lines)
}

fn help_lines() -> Vec<Line> {
    vec![
        Line::info("Available todo commands:"),
        Line::text("  todo add <task> [-p high|medium|low] [-d YYYY-MM-DD [HH:MM]]"),
        Line::text("  todo ls [-p|-d|-s] [-u] : List tasks"),
        Line::text("  todo check <ID>     : Toggle task status"),
        Line::text("  todo rm <ID>        : Remove a task"),
        Line::text("  todo clear          : DELETE ALL TASKS"),
    ]
}

fn handle_list(store: &TaskStore, args: &str) -> Result<Vec<Line>, CommandError> {
    if store.is_empty() {
        return Ok(vec![Line::info("No tasks found.")]);
    }

    let opts = parse_list_args(args);

    let mut rows = store.tasks().to_vec();
    if opts.unfinished_only {
        rows.retain(|t| !t.completed);
    }

    // All sorts are stable, so ties keep their store order.
    let sort_label = match opts.sort {
        Some(SortKey::Priority) => {
            rows.sort_by(|a, b| b.priority.rank().cmp(&a.priority.rank()));
            Some("Priority")
        }
        Some(SortKey::Date) => {
            // Dateless (or unparseable) due dates sort after every dated task.
            rows.sort_by(|a, b| {
                let a_key = a.due_date.as_deref().and_then(parse_due);
                let b_key = b.due_date.as_deref().and_then(parse_due);
                match (a_key, b_key) {
                    (Some(a), Some(b)) => a.cmp(&b),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            });
            Some("Due Date")
        }
        Some(SortKey::Status) => {
            rows.sort_by_key(|t| t.completed);
            Some("Status")
        }
        None => {
            rows.sort_by_key(|t| t.id);
            None
        }
    };

    let mut summary = String::from("Listing tasks");
    if opts.unfinished_only {
        summary.push_str(" (unfinished only)");
    }
    if let Some(label) = sort_label {
        summary.push_str(" sorted by ");
        summary.push_str(label);
    }
    summary.push(':');

    let mut lines = vec![Line::info(summary)];

    if rows.is_empty() {
        lines.push(Line::text("No matching tasks found."));
    } else {
        lines.push(Line::info(LIST_HEADER));
        lines.push(Line::text(LIST_SEPARATOR));
        lines.extend(rows.into_iter().map(Line::Task));
    }

    Ok(lines)
}

fn handle_add(store: &mut TaskStore, args: &str) -> Result<Vec<Line>, CommandError> {
    if args.is_empty() {
        return Err(CommandError::MissingDescription);
    }

    let parsed = parse_task_args(args);
    if parsed.text.is_empty() {
        return Err(CommandError::MissingTaskText);
    }

    let task = store.add(parsed.text, parsed.priority, parsed.due_date);
    Ok(vec![Line::success(format!(
        "Task added: [ID:{}] {}",
        task.id, task.text
    ))])
}

fn handle_toggle(store: &mut TaskStore, args: &str) -> Result<Vec<Line>, CommandError> {
    let id = parse_id(args)?;
    if store.toggle(id).is_none() {
        return Err(CommandError::TaskNotFound(id));
    }
    Ok(vec![Line::success(format!(
        "Task [ID:{}] status updated.",
        id
    ))])
}

fn handle_priority(store: &mut TaskStore, args: &str) -> Result<Vec<Line>, CommandError> {
    let mut tokens = args.split_whitespace();
    let id = tokens
        .next()
        .and_then(|t| t.parse::<i64>().ok())
        .ok_or(CommandError::PriorityUsage)?;
    // keep the level as typed for the echo; store it normalized
    let level_raw = tokens.next().ok_or(CommandError::PriorityUsage)?;
    let level = Priority::from_str(level_raw).ok_or(CommandError::PriorityUsage)?;

    if !store.set_priority(id, level) {
        return Err(CommandError::TaskNotFound(id));
    }
    Ok(vec![Line::success(format!(
        "Task [ID:{}] priority set to {}.",
        id, level_raw
    ))])
}

fn handle_due(store: &mut TaskStore, args: &str) -> Result<Vec<Line>, CommandError> {
    let mut tokens = args.split_whitespace();
    let id = tokens
        .next()
        .and_then(|t| t.parse::<i64>().ok())
        .ok_or(CommandError::DueUsage)?;
    // the remainder is the date literal, taken as-is
    let date = tokens.collect::<Vec<_>>().join(" ");
    if date.is_empty() {
        return Err(CommandError::DueUsage);
    }

    if !store.set_due_date(id, date.clone()) {
        return Err(CommandError::TaskNotFound(id));
    }
    Ok(vec![Line::success(format!(
        "Task [ID:{}] due date set to {}.",
        id, date
    ))])
}

fn handle_remove(store: &mut TaskStore, args: &str) -> Result<Vec<Line>, CommandError> {
    let id = parse_id(args)?;
    if !store.remove(id) {
        return Err(CommandError::TaskNotFound(id));
    }
    Ok(vec![Line::success(format!("Task [ID:{}] removed.", id))])
}

fn handle_clear(store: &mut TaskStore, elevated: bool) -> Result<Vec<Line>, CommandError> {
    if !elevated {
        return Err(CommandError::PermissionDenied {
            message: "Unable to clear database.".to_string(),
            hint: "Hint: This command requires root privileges. Try \"sudo todo clear\"."
                .to_string(),
        });
    }

    store.clear_all();
    Ok(vec![
        Line::success("System Message: ALL TASKS HAVE BEEN DELETED."),
        Line::info("Database reset complete."),
    ])
}

/// Parse the leading id token; extra tokens after it are ignored
fn parse_id(args: &str) -> Result<i64, CommandError> {
    args.split_whitespace()
        .next()
        .and_then(|t| t.parse::<i64>().ok())
        .ok_or(CommandError::InvalidTaskId)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(texts: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for text in texts {
            store.add(text.to_string(), Priority::Medium, None);
        }
        store
    }

    fn dispatch_on(store: &mut TaskStore, subcmd: &str, args: &str) -> Vec<Line> {
        dispatch(store, subcmd, args, false)
    }

    #[test]
    fn test_add_success_line() {
        let mut store = TaskStore::new();
        let lines = dispatch_on(&mut store, "add", "Buy milk -p high");
        assert_eq!(lines, vec![Line::success("Task added: [ID:1] Buy milk")]);
        assert_eq!(store.get(1).unwrap().priority, Priority::High);
    }

    #[test]
    fn test_add_empty_args() {
        let mut store = TaskStore::new();
        let lines = dispatch_on(&mut store, "add", "");
        assert_eq!(
            lines,
            vec![Line::error("Error: Please provide a task description.")]
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_flags_only() {
        let mut store = TaskStore::new();
        let lines = dispatch_on(&mut store, "add", "-p high -d 2025-12-01");
        assert_eq!(lines, vec![Line::error("Error: Task text is missing.")]);
        assert!(store.is_empty());
    }

    #[test]
    fn test_toggle_unknown_id() {
        let mut store = store_with(&["a"]);
        let lines = dispatch_on(&mut store, "check", "99");
        assert_eq!(lines, vec![Line::error("Error: Task [ID:99] not found.")]);
    }

    #[test]
    fn test_toggle_non_numeric() {
        let mut store = store_with(&["a"]);
        let lines = dispatch_on(&mut store, "check", "abc");
        assert_eq!(lines, vec![Line::error("Error: Please provide a valid ID.")]);
    }

    #[test]
    fn test_priority_invalid_level_is_usage_error() {
        let mut store = store_with(&["a"]);
        let lines = dispatch_on(&mut store, "priority", "1 urgent");
        assert_eq!(
            lines,
            vec![Line::error("Usage: todo priority <ID> <high|medium|low>")]
        );
        assert_eq!(store.get(1).unwrap().priority, Priority::Medium);
    }

    #[test]
    fn test_priority_echoes_level_as_typed() {
        let mut store = store_with(&["a"]);
        let lines = dispatch_on(&mut store, "priority", "1 HIGH");
        assert_eq!(
            lines,
            vec![Line::success("Task [ID:1] priority set to HIGH.")]
        );
        assert_eq!(store.get(1).unwrap().priority, Priority::High);
    }

    #[test]
    fn test_due_requires_id_and_date() {
        let mut store = store_with(&["a"]);
        let usage = Line::error("Usage: todo due <ID> <YYYY-MM-DD> [HH:MM]");
        assert_eq!(dispatch_on(&mut store, "due", "1"), vec![usage.clone()]);
        assert_eq!(dispatch_on(&mut store, "due", "x 2025-12-01"), vec![usage]);
    }

    #[test]
    fn test_due_stores_literal_remainder() {
        let mut store = store_with(&["a"]);
        let lines = dispatch_on(&mut store, "due", "1 whenever I get to it");
        assert_eq!(
            lines,
            vec![Line::success(
                "Task [ID:1] due date set to whenever I get to it."
            )]
        );
        assert_eq!(
            store.get(1).unwrap().due_date.as_deref(),
            Some("whenever I get to it")
        );
    }

    #[test]
    fn test_remove_success_and_not_found() {
        let mut store = store_with(&["a", "b"]);
        assert_eq!(
            dispatch_on(&mut store, "rm", "1"),
            vec![Line::success("Task [ID:1] removed.")]
        );
        assert_eq!(
            dispatch_on(&mut store, "rm", "1"),
            vec![Line::error("Error: Task [ID:1] not found.")]
        );
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_requires_elevation() {
        let mut store = store_with(&["a"]);
        let lines = dispatch(&mut store, "clear", "", false);
        assert_eq!(
            lines,
            vec![
                Line::error("Permission denied: Unable to clear database."),
                Line::info(
                    "Hint: This command requires root privileges. Try \"sudo todo clear\"."
                ),
            ]
        );
        assert_eq!(store.len(), 1);

        let lines = dispatch(&mut store, "clear", "", true);
        assert_eq!(
            lines,
            vec![
                Line::success("System Message: ALL TASKS HAVE BEEN DELETED."),
                Line::info("Database reset complete."),
            ]
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_subcommand() {
        let mut store = TaskStore::new();
        let lines = dispatch_on(&mut store, "frobnicate", "");
        assert_eq!(
            lines,
            vec![Line::error(
                "todo: 'frobnicate' is not a todo command. See 'todo help'."
            )]
        );
    }

    #[test]
    fn test_list_empty_store() {
        let mut store = TaskStore::new();
        let lines = dispatch_on(&mut store, "ls", "");
        assert_eq!(lines, vec![Line::info("No tasks found.")]);
    }

    #[test]
    fn test_list_filter_to_empty() {
        let mut store = store_with(&["a"]);
        store.toggle(1);
        let lines = dispatch_on(&mut store, "ls", "-u");
        assert_eq!(
            lines,
            vec![
                Line::info("Listing tasks (unfinished only):"),
                Line::text("No matching tasks found."),
            ]
        );
    }

    #[test]
    fn test_list_summary_mentions_sort() {
        let mut store = store_with(&["a"]);
        let lines = dispatch_on(&mut store, "ls", "-u -p");
        assert_eq!(
            lines[0],
            Line::info("Listing tasks (unfinished only) sorted by Priority:")
        );
        assert_eq!(lines[1], Line::info(LIST_HEADER));
        assert_eq!(lines[2], Line::text(LIST_SEPARATOR));
    }

    fn listed_ids(lines: &[Line]) -> Vec<i64> {
        lines
            .iter()
            .filter_map(|l| match l {
                Line::Task(t) => Some(t.id),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_list_priority_sort_is_descending() {
        let mut store = TaskStore::new();
        store.add("low".into(), Priority::Low, None);
        store.add("high".into(), Priority::High, None);
        store.add("medium".into(), Priority::Medium, None);
        let lines = dispatch_on(&mut store, "ls", "-p");
        assert_eq!(listed_ids(&lines), vec![2, 3, 1]);
    }

    #[test]
    fn test_list_date_sort_puts_dateless_last() {
        let mut store = TaskStore::new();
        store.add("none".into(), Priority::Medium, None);
        store.add("late".into(), Priority::Medium, Some("2026-02-01".into()));
        store.add("early".into(), Priority::Medium, Some("2026-01-01 08:00".into()));
        store.add("garbled".into(), Priority::Medium, Some("soonish".into()));
        let lines = dispatch_on(&mut store, "ls", "-d");
        // dated ascending first, then dateless/unparseable in store order
        assert_eq!(listed_ids(&lines), vec![3, 2, 1, 4]);
    }

    #[test]
    fn test_list_status_sort_incomplete_first() {
        let mut store = store_with(&["a", "b", "c"]);
        store.toggle(1);
        let lines = dispatch_on(&mut store, "ls", "-s");
        assert_eq!(listed_ids(&lines), vec![2, 3, 1]);
    }

    #[test]
    fn test_list_default_sorts_by_id() {
        let mut store = store_with(&["a", "b", "c"]);
        let lines = dispatch_on(&mut store, "ls", "");
        assert_eq!(listed_ids(&lines), vec![1, 2, 3]);
    }

    #[test]
    fn test_list_unfinished_is_subset() {
        let mut store = store_with(&["a", "b", "c"]);
        store.toggle(2);
        let all = listed_ids(&dispatch_on(&mut store, "ls", ""));
        let unfinished = listed_ids(&dispatch_on(&mut store, "ls", "-u"));
        assert_eq!(unfinished, vec![1, 3]);
        assert!(unfinished.iter().all(|id| all.contains(id)));
    }
}
