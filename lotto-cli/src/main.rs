mod commands;
mod config;

use clap::{Parser, Subcommand};
use lotto_core::{DrawLedger, LedgerError};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "lotto")]
#[command(about = "Lottery draw and ticket ledger")]
#[command(version)]
struct Cli {
    /// Data directory for the ledger database
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw lifecycle commands
    #[command(subcommand)]
    Draw(commands::DrawCommands),

    /// Ticket commands
    #[command(subcommand)]
    Ticket(commands::TicketCommands),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "lotto_core={0},lotto_cli={0}",
            log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Get data directory
    let data_dir = cli
        .data_dir
        .unwrap_or_else(|| config::CliConfig::default().data_dir);
    tracing::debug!("Using data directory {:?}", data_dir);

    // Ensure data directory exists
    tokio::fs::create_dir_all(&data_dir).await?;

    // Open the ledger
    let ledger = DrawLedger::new(&data_dir).await?;

    // Execute command
    let result = match cli.command {
        Commands::Draw(cmd) => commands::handle_draw_command(cmd, &ledger).await,
        Commands::Ticket(cmd) => commands::handle_ticket_command(cmd, &ledger).await,
    };

    if let Err(e) = result {
        match e {
            LedgerError::DrawNotFound { id } => {
                eprintln!("Error: Draw {} not found", id);
            }
            LedgerError::Validation(msg) => {
                eprintln!("Error: Invalid ticket numbers: {}", msg);
                eprintln!("Pick 5 distinct numbers between 1 and 36");
            }
            LedgerError::Conflict(msg) => {
                eprintln!("Error: {}", msg);
                eprintln!("Close the current draw before opening a new one");
            }
            LedgerError::State(msg) => {
                eprintln!("Error: {}", msg);
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
