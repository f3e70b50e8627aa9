#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskCompleted(String),
    TaskAlreadyCompleted(String),
    TaskRemoved(String),
    TaskNotFound(String),
    TaskAlreadyExists(String),
    TasksHeader,
    NoTasksFound,

    // === SESSION MESSAGES ===
    SessionWelcome,
    SessionGoodbye,
    InvalidCommand(String),
    InvalidDueDate(String),

    // === PROMPTS ===
    PromptCommand,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskDueDate(String), // input format
    PromptTaskPriority,
    ConfirmRemoveTask(String),
    PromptDateFormat,
    PromptConfirmRemove,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
}
