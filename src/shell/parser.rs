// Argument parsing for the todo command family
//
// Two small grammars: the `add` argument string (free text interleaved
// with -p/-d flags) and the `ls` flag set. Both scan whitespace tokens
// left to right with an index walk.

use crate::models::Priority;

/// Parsed `add` arguments
#[derive(Debug, Default, PartialEq)]
pub struct ParsedTaskArgs {
    pub text: String,
    pub priority: Priority,
    pub due_date: Option<String>,
}

/// Parse the argument string of `todo add`.
///
/// Grammar, scanned left to right:
/// - `-p <level>`: sets priority when the level names one of
///   high/medium/low (any case). A malformed level is still consumed as
///   the flag's value and discarded; priority stays at the default.
/// - `-d <date>`: takes the next token as the date literal; if the token
///   after that matches `H:MM`/`HH:MM` it is absorbed into the date,
///   space-separated. No validation of the date itself.
/// - anything else accumulates into the task text, rejoined with single
///   spaces in original order.
///
/// A trailing `-p`/`-d` with no token after it is ordinary text.
pub fn parse_task_args(arg_string: &str) -> ParsedTaskArgs {
    let args: Vec<&str> = arg_string.split_whitespace().collect();
    let mut text_parts: Vec<&str> = Vec::new();
    let mut priority = Priority::default();
    let mut due_date: Option<String> = None;

    let mut i = 0;
    while i < args.len() {
        if args[i] == "-p" && i + 1 < args.len() {
            if let Some(level) = Priority::from_str(args[i + 1]) {
                priority = level;
            }
            i += 2;
        } else if args[i] == "-d" && i + 1 < args.len() {
            let mut date_part = args[i + 1].to_string();
            i += 2;

            if i < args.len() && is_time_token(args[i]) {
                date_part.push(' ');
                date_part.push_str(args[i]);
                i += 1;
            }
            due_date = Some(date_part);
        } else {
            text_parts.push(args[i]);
            i += 1;
        }
    }

    ParsedTaskArgs {
        text: text_parts.join(" "),
        priority,
        due_date,
    }
}

/// Strict `H:MM` / `HH:MM` check (the time part absorbed after `-d`)
fn is_time_token(token: &str) -> bool {
    let Some((hours, minutes)) = token.split_once(':') else {
        return false;
    };
    (1..=2).contains(&hours.len())
        && minutes.len() == 2
        && hours.chars().all(|c| c.is_ascii_digit())
        && minutes.chars().all(|c| c.is_ascii_digit())
}

/// Sort key selected by an `ls` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Priority,
    Date,
    Status,
}

/// Parsed `ls` flags
#[derive(Debug, Default, PartialEq)]
pub struct ListOptions {
    pub unfinished_only: bool,
    pub sort: Option<SortKey>,
}

/// Parse the trailing flags of `todo ls`.
///
/// `-u`/`--unfinished` filters to incomplete tasks. The first token that
/// names a sort key wins; later sort flags are ignored. Unrecognized
/// tokens are ignored entirely.
pub fn parse_list_args(arg_string: &str) -> ListOptions {
    let args: Vec<&str> = arg_string.split_whitespace().collect();

    let unfinished_only = args.iter().any(|a| *a == "-u" || *a == "--unfinished");

    let sort = args.iter().find_map(|arg| match *arg {
        "-p" | "--priority" => Some(SortKey::Priority),
        "-d" | "--date" => Some(SortKey::Date),
        "-s" | "--status" => Some(SortKey::Status),
        _ => None,
    });

    ListOptions {
        unfinished_only,
        sort,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_text() {
        let parsed = parse_task_args("Buy milk");
        assert_eq!(parsed.text, "Buy milk");
        assert_eq!(parsed.priority, Priority::Medium);
        assert_eq!(parsed.due_date, None);
    }

    #[test]
    fn test_parse_with_priority_and_datetime() {
        let parsed = parse_task_args("Buy milk -p high -d 2025-12-01 09:30");
        assert_eq!(parsed.text, "Buy milk");
        assert_eq!(parsed.priority, Priority::High);
        assert_eq!(parsed.due_date.as_deref(), Some("2025-12-01 09:30"));
    }

    #[test]
    fn test_flags_anywhere_in_text() {
        let parsed = parse_task_args("-p low water -d 2026-01-01 the plants");
        assert_eq!(parsed.text, "water the plants");
        assert_eq!(parsed.priority, Priority::Low);
        assert_eq!(parsed.due_date.as_deref(), Some("2026-01-01"));
    }

    #[test]
    fn test_priority_is_case_insensitive() {
        let parsed = parse_task_args("call mom -p HIGH");
        assert_eq!(parsed.priority, Priority::High);
    }

    #[test]
    fn test_malformed_priority_value_is_discarded() {
        // "urgent" is consumed as the flag value but changes nothing
        let parsed = parse_task_args("call mom -p urgent");
        assert_eq!(parsed.text, "call mom");
        assert_eq!(parsed.priority, Priority::Medium);
    }

    #[test]
    fn test_date_without_time() {
        let parsed = parse_task_args("pay rent -d 2025-12-01");
        assert_eq!(parsed.due_date.as_deref(), Some("2025-12-01"));
        assert_eq!(parsed.text, "pay rent");
    }

    #[test]
    fn test_non_time_token_after_date_stays_text() {
        let parsed = parse_task_args("pay rent -d 2025-12-01 promptly");
        assert_eq!(parsed.due_date.as_deref(), Some("2025-12-01"));
        assert_eq!(parsed.text, "pay rent promptly");
    }

    #[test]
    fn test_trailing_flag_is_text() {
        let parsed = parse_task_args("finish report -p");
        assert_eq!(parsed.text, "finish report -p");
        assert_eq!(parsed.priority, Priority::Medium);

        let parsed = parse_task_args("finish report -d");
        assert_eq!(parsed.text, "finish report -d");
        assert_eq!(parsed.due_date, None);
    }

    #[test]
    fn test_unknown_flags_are_ordinary_text() {
        let parsed = parse_task_args("run benchmarks -x fast");
        assert_eq!(parsed.text, "run benchmarks -x fast");
    }

    #[test]
    fn test_flags_only_yields_empty_text() {
        let parsed = parse_task_args("-p high -d 2025-12-01");
        assert_eq!(parsed.text, "");
        assert_eq!(parsed.priority, Priority::High);
        assert_eq!(parsed.due_date.as_deref(), Some("2025-12-01"));
    }

    #[test]
    fn test_time_token_shapes() {
        assert!(is_time_token("9:30"));
        assert!(is_time_token("09:30"));
        assert!(!is_time_token("9:3"));
        assert!(!is_time_token("123:30"));
        assert!(!is_time_token("9-30"));
        assert!(!is_time_token("ab:cd"));
        assert!(!is_time_token("09:30:00"));
    }

    #[test]
    fn test_list_defaults() {
        let opts = parse_list_args("");
        assert_eq!(opts, ListOptions::default());
    }

    #[test]
    fn test_list_unfinished_both_spellings() {
        assert!(parse_list_args("-u").unfinished_only);
        assert!(parse_list_args("--unfinished").unfinished_only);
    }

    #[test]
    fn test_list_first_sort_flag_wins() {
        let opts = parse_list_args("-s -p");
        assert_eq!(opts.sort, Some(SortKey::Status));

        let opts = parse_list_args("--date -s");
        assert_eq!(opts.sort, Some(SortKey::Date));
    }

    #[test]
    fn test_list_filter_and_sort_combine() {
        let opts = parse_list_args("-u --priority");
        assert!(opts.unfinished_only);
        assert_eq!(opts.sort, Some(SortKey::Priority));
    }
}
