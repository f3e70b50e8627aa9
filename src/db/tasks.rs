use super::db::{Db, StoreError};
use crate::libs::task::Task;
use rusqlite::{params, Connection};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    title TEXT PRIMARY KEY,
    description TEXT,
    due_date DATE,
    priority INTEGER,
    status BOOLEAN
);";
const INSERT_TASK: &str = "INSERT INTO tasks (title, description, due_date, priority, status) VALUES (?1, ?2, ?3, ?4, ?5)";
const DELETE_ALL_TASKS: &str = "DELETE FROM tasks";
const DELETE_TASK_BY_TITLE: &str = "DELETE FROM tasks WHERE title = ?1";
const SELECT_TASKS: &str = "SELECT title, description, due_date, priority, status FROM tasks";

/// Durable task table, keyed by title.
pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    /// Opens the store and ensures the schema exists. Safe to call against
    /// an already-initialized database.
    pub fn new() -> Result<Self, StoreError> {
        let db = Db::new()?;
        db.conn
            .execute(SCHEMA_TASKS, [])
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Tasks { conn: db.conn })
    }

    /// Replaces the entire table contents with the given sequence.
    ///
    /// Delete-all then insert-each, inside a single transaction: after a
    /// successful call the table holds exactly `tasks`, and a failed call
    /// leaves the previous contents untouched.
    pub fn replace_all(&mut self, tasks: &[Task]) -> Result<(), StoreError> {
        let tx = self.conn.transaction()?;
        tx.execute(DELETE_ALL_TASKS, [])?;
        for task in tasks {
            tx.execute(
                INSERT_TASK,
                params![task.title, task.description, task.due_date, task.priority, task.completed],
            )?;
        }
        tx.commit()?;

        Ok(())
    }

    /// Removes at most one row matching the title. Success when no row matches.
    pub fn delete_by_title(&mut self, title: &str) -> Result<(), StoreError> {
        self.conn.execute(DELETE_TASK_BY_TITLE, params![title])?;

        Ok(())
    }

    /// Full scan, in storage order.
    pub fn load_all(&mut self) -> Result<Vec<Task>, StoreError> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map([], |row| {
            Ok(Task {
                title: row.get(0)?,
                description: row.get(1)?,
                due_date: row.get(2)?,
                priority: row.get(3)?,
                completed: row.get(4)?,
            })
        })?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }
}
