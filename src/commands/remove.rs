use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task_list::TaskList;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Title of the task to remove
    #[arg(required = true)]
    title: String,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: RemoveArgs) -> Result<()> {
    let config = Config::read()?;
    let mut list = TaskList::load(Tasks::new()?)?;

    if list.find(&args.title).is_none() {
        msg_error!(Message::TaskNotFound(args.title));
        return Ok(());
    }

    if config.confirm_remove && !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmRemoveTask(args.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    list.remove(&args.title)?;
    msg_success!(Message::TaskRemoved(args.title));

    Ok(())
}
