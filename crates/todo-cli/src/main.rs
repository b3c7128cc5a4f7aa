mod cli;
mod output;
mod replay;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use std::io::Read;
use todo_core::AppConfig;
use todo_tui::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("TODO_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)
            .with_context(|| format!("Failed to open debug log {}", log_path))?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        None => {
            let config = AppConfig::load().with_fade_duration_ms(cli.fade_ms);
            tracing::info!(
                "Starting with fade duration {:?}",
                config.effective_fade_duration()
            );
            let mut app = App::new(config);
            app.run().await?;
        }
        Some(Commands::Replay { file }) => {
            let script = match file {
                Some(path) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read script {}", path.display()))?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };

            match replay::run(&script) {
                Ok(store) => output::output_success(replay::ReplaySummary::from_store(&store))?,
                Err(e) => output::output_error(&e.to_string()),
            }
        }
        Some(Commands::Completions { shell }) => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
        }
    }

    Ok(())
}
