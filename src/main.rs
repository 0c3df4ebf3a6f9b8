use anyhow::Result;
use eisen::commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging only when the user opted in; the message macros
    // fall back to plain console output otherwise.
    if std::env::var("EISEN_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
