use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task_list::TaskList;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, ValueEnum)]
enum SortBy {
    /// Ascending by due date
    Date,
    /// Ascending by priority, lower number first
    Priority,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Sort order for the listing
    #[arg(short, long, value_enum)]
    sort: Option<SortBy>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let mut list = TaskList::load(Tasks::new()?)?;

    if list.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    match args.sort {
        Some(SortBy::Date) => list.sort_by_due_date(),
        Some(SortBy::Priority) => list.sort_by_priority(),
        None => {}
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(list.snapshot())?;

    Ok(())
}
