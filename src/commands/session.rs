use super::add;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::libs::task_list::TaskList;
use crate::libs::view::View;
use crate::{msg_debug, msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Interactive session: renders the list, reads a command, dispatches.
///
/// Sort commands reorder the session's collection; the ordering lives for
/// the session only. The store handle is opened once here and dropped on
/// every way out of the loop, `exit` and errors alike.
pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut list = TaskList::load(Tasks::new()?)?;

    msg_print!(Message::SessionWelcome, true);

    loop {
        if list.is_empty() {
            msg_info!(Message::NoTasksFound);
        } else {
            View::tasks(list.snapshot())?;
        }

        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCommand.to_string())
            .interact_text()?;
        let command = input.trim();
        msg_debug!(format!("session command: {}", command));

        match command {
            "add" => handle_add(&mut list, &config)?,
            "complete" => handle_complete(&mut list)?,
            "remove" => handle_remove(&mut list, &config)?,
            "show" => handle_show(&list)?,
            "sortDate" => list.sort_by_due_date(),
            "sortPriority" => list.sort_by_priority(),
            "exit" => break,
            _ => msg_error!(Message::InvalidCommand(command.to_string())),
        }
    }

    msg_print!(Message::SessionGoodbye);

    Ok(())
}

fn handle_add(list: &mut TaskList, config: &Config) -> Result<()> {
    let title = add::prompt_title()?;
    if list.find(&title).is_some() {
        msg_error!(Message::TaskAlreadyExists(title));
        return Ok(());
    }
    let description = add::prompt_description()?;
    let due_date = add::prompt_due_date(config)?;
    let priority = add::prompt_priority()?;

    // A failed sync is reported and the session goes on; the collection
    // rolls the append back so memory and store stay in step.
    if let Err(err) = list.add(Task::new(&title, &description, due_date, priority)) {
        msg_error!(err);
        return Ok(());
    }
    msg_success!(Message::TaskAdded(title));

    Ok(())
}

fn handle_complete(list: &mut TaskList) -> Result<()> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .interact_text()?;

    if let Some(task) = list.find(&title) {
        if task.completed {
            msg_warning!(Message::TaskAlreadyCompleted(title));
            return Ok(());
        }
    }

    match list.mark_complete(&title) {
        Ok(true) => msg_success!(Message::TaskCompleted(title)),
        Ok(false) => msg_error!(Message::TaskNotFound(title)),
        Err(err) => msg_error!(err),
    }

    Ok(())
}

fn handle_remove(list: &mut TaskList, config: &Config) -> Result<()> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .interact_text()?;

    if list.find(&title).is_none() {
        msg_error!(Message::TaskNotFound(title));
        return Ok(());
    }

    if config.confirm_remove {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmRemoveTask(title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    match list.remove(&title) {
        Ok(_) => msg_success!(Message::TaskRemoved(title)),
        Err(err) => msg_error!(err),
    }

    Ok(())
}

fn handle_show(list: &TaskList) -> Result<()> {
    let title: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .interact_text()?;

    match list.find(&title) {
        Some(task) => View::task(task)?,
        None => msg_error!(Message::TaskNotFound(title)),
    }

    Ok(())
}
