//! Display implementation for todl application messages.
//!
//! Converts structured [`Message`] values into the text shown to the user.
//! Keeping every string in one place keeps wording consistent and makes the
//! messages easy to adjust without touching command logic.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(title) => format!("Task '{}' added successfully", title),
            Message::TaskCompleted(title) => format!("Task '{}' marked as completed", title),
            Message::TaskAlreadyCompleted(title) => format!("Task '{}' is already completed", title),
            Message::TaskRemoved(title) => format!("Task '{}' removed successfully", title),
            Message::TaskNotFound(title) => format!("Task '{}' not found", title),
            Message::TaskAlreadyExists(title) => format!("Task '{}' already exists", title),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks yet".to_string(),

            // === SESSION MESSAGES ===
            Message::SessionWelcome => "Welcome to the todl task manager!".to_string(),
            Message::SessionGoodbye => "Goodbye!".to_string(),
            Message::InvalidCommand(command) => format!(
                "Unknown command '{}'. Valid commands: add, complete, remove, show, sortDate, sortPriority, exit",
                command
            ),
            Message::InvalidDueDate(input) => format!("'{}' is not a valid due date", input),

            // === PROMPTS ===
            Message::PromptCommand => "Command".to_string(),
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Task description".to_string(),
            Message::PromptTaskDueDate(format) => format!("Due date ({})", format),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::ConfirmRemoveTask(title) => format!("Remove task '{}'?", title),
            Message::PromptDateFormat => "Due date input format".to_string(),
            Message::PromptConfirmRemove => "Confirm before removing tasks?".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file, using defaults".to_string(),
        };
        write!(f, "{}", message)
    }
}
