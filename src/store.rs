// In-memory task store
//
// Owns the task collection for the lifetime of one shell session. Nothing
// is persisted; the store dies with the process.

use crate::models::{Priority, Task};

/// Ordered collection of tasks with monotonic id assignment.
///
/// Invariants:
/// - all ids are distinct
/// - ids are never reused after `remove`, even when the highest id is the
///   one removed (the internal counter never goes backwards)
/// - `clear_all` is the only operation that resets the counter
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: i64,
}

impl TaskStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store from existing tasks; the id counter starts past the
    /// highest existing id
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self { tasks, next_id }
    }

    /// The demo task set the interactive shell boots with
    pub fn seeded() -> Self {
        Self::with_tasks(vec![
            Task {
                id: 1,
                text: "Learn Rust".to_string(),
                completed: true,
                priority: Priority::High,
                due_date: Some("2025-11-19 14:00".to_string()),
            },
            Task {
                id: 2,
                text: "Submit assignment".to_string(),
                completed: false,
                priority: Priority::High,
                due_date: Some("2025-11-19 23:00".to_string()),
            },
            Task {
                id: 3,
                text: "Update portfolio".to_string(),
                completed: false,
                priority: Priority::Low,
                due_date: Some("2025-12-01".to_string()),
            },
        ])
    }

    /// Add a new task and return a reference to it
    pub fn add(&mut self, text: String, priority: Priority, due_date: Option<String>) -> &Task {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task::new(id, text, priority, due_date));
        self.tasks.last().unwrap()
    }

    pub fn get(&self, id: i64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: i64) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Flip the completed flag; returns the new value, or None if the id
    /// is unknown
    pub fn toggle(&mut self, id: i64) -> Option<bool> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        Some(task.completed)
    }

    /// Set the priority; returns false if the id is unknown
    pub fn set_priority(&mut self, id: i64, priority: Priority) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.priority = priority;
                true
            }
            None => false,
        }
    }

    /// Set the due date to the literal string; returns false if the id is
    /// unknown
    pub fn set_due_date(&mut self, id: i64, due: String) -> bool {
        match self.get_mut(id) {
            Some(task) => {
                task.due_date = Some(due);
                true
            }
            None => false,
        }
    }

    /// Remove a task; returns false if the id is unknown. Remaining tasks
    /// keep their ids and the id counter does not go back.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        self.tasks.len() != before
    }

    /// Delete every task and restart id assignment from 1
    pub fn clear_all(&mut self) {
        self.tasks.clear();
        self.next_id = 1;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}
