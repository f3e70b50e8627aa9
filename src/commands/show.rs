use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task_list::TaskList;
use crate::libs::view::View;
use crate::msg_error;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Title of the task to show
    #[arg(required = true)]
    title: String,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let list = TaskList::load(Tasks::new()?)?;

    match list.find(&args.title) {
        Some(task) => View::task(task)?,
        None => msg_error!(Message::TaskNotFound(args.title)),
    }

    Ok(())
}
