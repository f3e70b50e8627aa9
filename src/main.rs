use anyhow::Result;
use todl::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging is only wired up when the user asks for it;
    // normal runs keep the console free for the task views.
    if std::env::var("TODL_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
            .init();
    }

    Cli::menu()
}
