// Catalog Admin - terminal client for a product catalog service
//
// Lists, creates, updates and deletes products against a REST endpoint
// (`{api_url}/products`) and keeps a local copy of what the server returned.
//
// Architecture:
// - Catalog (reqwest): HTTP client, product types and the local cache
// - Events: Request/Outcome messages between the UI and spawned HTTP tasks
// - TUI (ratatui): Form, product cards, notifications and activity log
// - Logging (tracing): Captured into a buffer while the TUI owns the terminal

mod catalog;
mod cli;
mod config;
mod events;
mod logging;
mod tui;

use anyhow::Result;
use catalog::CatalogClient;
use clap::Parser;
use config::Config;
use logging::LogBuffer;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Handle CLI commands first (config --show, --path, --reset)
    if cli::handle_command(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    cli.apply_overrides(&mut config);

    // Logs go to the activity panel, never stdout, while the TUI is up.
    // The guard must live until exit so the file writer flushes.
    let log_buffer = LogBuffer::new();
    let _file_guard = logging::init(&config.logging, log_buffer.clone());

    tracing::info!("Catalog Admin v{} using {}", config::VERSION, config.api_url);

    let client = CatalogClient::new(&config.api_url)?;
    tui::run_tui(config, client, log_buffer).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
