pub mod add;
pub mod complete;
pub mod init;
pub mod list;
pub mod remove;
pub mod session;
pub mod show;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "Mark a task as completed")]
    Complete(complete::CompleteArgs),
    #[command(about = "Remove a task")]
    Remove(remove::RemoveArgs),
    #[command(about = "Show a single task")]
    Show(show::ShowArgs),
    #[command(about = "List tasks")]
    List(list::ListArgs),
    #[command(about = "Configuration initialization")]
    Init,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Add(args)) => add::cmd(args),
            Some(Commands::Complete(args)) => complete::cmd(args),
            Some(Commands::Remove(args)) => remove::cmd(args),
            Some(Commands::Show(args)) => show::cmd(args),
            Some(Commands::List(args)) => list::cmd(args),
            Some(Commands::Init) => init::cmd(),
            None => session::cmd(),
        }
    }
}
