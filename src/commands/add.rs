use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::libs::task_list::TaskList;
use crate::{msg_error, msg_error_anyhow, msg_success};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    title: Option<String>,
    /// Task description
    #[arg(short, long)]
    description: Option<String>,
    /// Due date, in the configured input format
    #[arg(long)]
    due: Option<String>,
    /// Task priority, lower number means more urgent
    #[arg(short, long)]
    priority: Option<i32>,
}

/// Adds a task, prompting for any field not given on the command line.
pub fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let mut list = TaskList::load(Tasks::new()?)?;

    let title = match args.title {
        Some(title) => title,
        None => prompt_title()?,
    };
    if list.find(&title).is_some() {
        msg_error!(Message::TaskAlreadyExists(title));
        return Ok(());
    }

    let description = match args.description {
        Some(description) => description,
        None => prompt_description()?,
    };
    let due_date = match args.due {
        Some(due) => {
            NaiveDate::parse_from_str(&due, &config.date_format).map_err(|_| msg_error_anyhow!(Message::InvalidDueDate(due.clone())))?
        }
        None => prompt_due_date(&config)?,
    };
    let priority = match args.priority {
        Some(priority) => priority,
        None => prompt_priority()?,
    };

    list.add(Task::new(&title, &description, due_date, priority))?;
    msg_success!(Message::TaskAdded(title));

    Ok(())
}

pub(crate) fn prompt_title() -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskTitle.to_string())
        .interact_text()?)
}

pub(crate) fn prompt_description() -> Result<String> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?)
}

/// Prompts for a due date, re-prompting until the input parses with the
/// configured format.
pub(crate) fn prompt_due_date(config: &Config) -> Result<NaiveDate> {
    let format = config.date_format.clone();
    let validator_format = format.clone();
    let input: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate(format.clone()).to_string())
        .validate_with(move |value: &String| -> Result<(), String> {
            NaiveDate::parse_from_str(value, &validator_format)
                .map(|_| ())
                .map_err(|_| Message::InvalidDueDate(value.clone()).to_string())
        })
        .interact_text()?;

    Ok(NaiveDate::parse_from_str(&input, &format)?)
}

pub(crate) fn prompt_priority() -> Result<i32> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .default(1)
        .interact_text()?)
}
