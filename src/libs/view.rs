use super::formatter::{format_due_date, format_status};
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders the collection as a table, in the given order.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TITLE", "DUE DATE", "PRIORITY", "STATUS"]);
        for task in tasks {
            table.add_row(row![
                task.title,
                format_due_date(&task.due_date),
                task.priority,
                format_status(task.completed)
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Renders a single task with all its fields.
    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["Title", task.title]);
        table.add_row(row!["Description", task.description]);
        table.add_row(row!["Due Date", format_due_date(&task.due_date)]);
        table.add_row(row!["Priority", task.priority]);
        table.add_row(row!["Status", format_status(task.completed)]);
        table.printstd();

        Ok(())
    }
}
