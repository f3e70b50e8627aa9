//! # Todl - a personal to-do list manager
//!
//! A command-line utility for tracking tasks with due dates, priorities
//! and completion status, persisted in a local SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Add, complete, remove and display tasks
//! - **Sorting**: Stable ordering by due date or priority
//! - **Persistence**: Every mutation is synchronized to SQLite
//! - **Interactive Session**: A prompt-driven session for working through a list
//! - **Configuration**: Date input format and confirmation behavior
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todl::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
