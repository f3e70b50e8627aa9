use crate::db::db::StoreError;
use crate::db::tasks::Tasks;
use crate::libs::task::Task;

/// In-memory ordered task collection kept in step with the SQLite store.
///
/// The vector is authoritative for ordering within a session: insertion
/// order until a sort is applied, then the sort's output order. The store
/// is authoritative across runs. Mutations never leave the two diverged:
/// removals hit the store before memory, additions and completions roll
/// back when the sync fails.
pub struct TaskList {
    tasks: Vec<Task>,
    store: Tasks,
}

impl TaskList {
    /// Builds the collection from a full scan of the store.
    pub fn load(mut store: Tasks) -> Result<Self, StoreError> {
        let tasks = store.load_all()?;

        Ok(TaskList { tasks, store })
    }

    /// Appends a task to the end of the collection and syncs the store.
    /// The append is rolled back if the sync fails.
    pub fn add(&mut self, task: Task) -> Result<(), StoreError> {
        self.tasks.push(task);
        if let Err(err) = self.store.replace_all(&self.tasks) {
            self.tasks.pop();
            return Err(err);
        }

        Ok(())
    }

    /// Removes the first task whose title matches. The durable delete must
    /// succeed before the in-memory removal is committed. Returns
    /// `Ok(false)` when no task matches, leaving the store untouched.
    pub fn remove(&mut self, title: &str) -> Result<bool, StoreError> {
        let pos = match self.tasks.iter().position(|task| task.title == title) {
            Some(pos) => pos,
            None => return Ok(false),
        };
        self.store.delete_by_title(title)?;
        self.tasks.remove(pos);

        Ok(true)
    }

    /// First task whose title matches, in current order.
    pub fn find(&self, title: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.title == title)
    }

    /// Marks the first matching task completed and syncs the store,
    /// reverting the flag if the sync fails. Returns `Ok(false)` when no
    /// task matches, leaving the collection and store untouched.
    pub fn mark_complete(&mut self, title: &str) -> Result<bool, StoreError> {
        let pos = match self.tasks.iter().position(|task| task.title == title) {
            Some(pos) => pos,
            None => return Ok(false),
        };
        let previous = self.tasks[pos].completed;
        self.tasks[pos].completed = true;
        if let Err(err) = self.store.replace_all(&self.tasks) {
            self.tasks[pos].completed = previous;
            return Err(err);
        }

        Ok(true)
    }

    /// Stable ascending sort by due date. Ordering is session state only
    /// and is not written back to the store.
    pub fn sort_by_due_date(&mut self) {
        self.tasks.sort_by_key(|task| task.due_date);
    }

    /// Stable ascending sort by priority, lower number first.
    pub fn sort_by_priority(&mut self) {
        self.tasks.sort_by_key(|task| task.priority);
    }

    /// Read-only ordered view for display.
    pub fn snapshot(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
