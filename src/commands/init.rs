use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input};

/// Interactive configuration setup. Existing values are offered as defaults.
pub fn cmd() -> Result<()> {
    let config = Config::read()?;

    let date_format: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptDateFormat.to_string())
        .default(config.date_format.clone())
        .interact_text()?;

    let confirm_remove = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptConfirmRemove.to_string())
        .default(config.confirm_remove)
        .interact()?;

    let config = Config { date_format, confirm_remove };
    config.save()?;
    msg_success!(Message::ConfigSaved);

    Ok(())
}
