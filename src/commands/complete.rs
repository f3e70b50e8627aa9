use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task_list::TaskList;
use crate::{msg_error, msg_success, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Title of the task to mark as completed
    #[arg(required = true)]
    title: String,
}

pub fn cmd(args: CompleteArgs) -> Result<()> {
    let mut list = TaskList::load(Tasks::new()?)?;

    if let Some(task) = list.find(&args.title) {
        if task.completed {
            msg_warning!(Message::TaskAlreadyCompleted(args.title));
            return Ok(());
        }
    }

    if list.mark_complete(&args.title)? {
        msg_success!(Message::TaskCompleted(args.title));
    } else {
        msg_error!(Message::TaskNotFound(args.title));
    }

    Ok(())
}
