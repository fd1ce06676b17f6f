//! Tosh - an emulated terminal shell around an in-memory todo list
//!
//! This library provides the core functionality for Tosh, including:
//! - The task data model and in-memory store
//! - The command interpreter and todo sub-dispatcher
//! - The sudo-style privilege gate state machine
//! - The append-only transcript of structured output records
//! - The interactive host that renders the transcript to a terminal
//!
//! Nothing is persisted and nothing is executed: the shell, its tasks and
//! its "authentication" are all emulation living in process memory.
//!
//! # Example
//!
//! ```
//! use tosh::shell::Session;
//! use tosh::store::TaskStore;
//!
//! let mut session = Session::new(TaskStore::new());
//! session.submit("todo add Buy milk -p high");
//! assert_eq!(session.store().len(), 1);
//! ```

pub mod config;
pub mod host;
pub mod models;
pub mod shell;
pub mod store;
pub mod utils;
