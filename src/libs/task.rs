use chrono::NaiveDate;

/// A single to-do item.
///
/// The title doubles as the primary key in the store; the collection keeps
/// first-match scan semantics and the CLI rejects duplicate titles on add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub due_date: NaiveDate,
    /// Lower number means more urgent.
    pub priority: i32,
    pub completed: bool,
}

impl Task {
    pub fn new(title: &str, description: &str, due_date: NaiveDate, priority: i32) -> Self {
        Task {
            title: title.to_string(),
            description: description.to_string(),
            due_date,
            priority,
            completed: false,
        }
    }
}
