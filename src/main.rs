use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::ProgressBar;
use tracing::warn;

use verityflow::backend::client::VerityClient;
use verityflow::config::Config;
use verityflow::history::{HistoryController, HistoryState, DEFAULT_HISTORY_LIMIT};

/// VerityFlow: scam, fake-news and phishing verdicts for forwarded messages.
///
/// Paste a suspicious message and get a structured credibility verdict
/// with supporting evidence, then browse and export past analyses.
#[derive(Parser)]
#[command(name = "verityflow", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a forwarded message
    Analyze {
        /// The message text (omit with --paste to read the clipboard)
        message: Option<String>,

        /// Read the message from the system clipboard
        #[arg(long)]
        paste: bool,
    },

    /// Browse past analyses, optionally filtered by a search term
    History {
        /// Search term matched against stored messages
        search: Option<String>,

        /// Max entries to fetch (default: 50)
        #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
        limit: u32,
    },

    /// Export the analysis history as a paginated PDF document
    ExportPdf {
        /// Search term matched against stored messages
        #[arg(long)]
        search: Option<String>,
    },

    /// Export the analysis history as a CSV file (server-generated)
    ExportCsv,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("verityflow=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = Config::load()?;
    config.require_backend()?;
    let client = VerityClient::new(&config.api_url)?;

    match cli.command {
        Commands::Analyze { message, paste } => {
            let message = match resolve_message(message, paste) {
                Some(text) => text,
                None => return Ok(()),
            };

            // Reject empty input before any network call
            let message = message.trim().to_string();
            if message.is_empty() {
                println!("{} Please enter a message to analyze", "Error:".red());
                return Ok(());
            }

            let pb = spinner("Analyzing message...");
            let result = client.analyze_message(&message).await;
            pb.finish_and_clear();

            match result {
                Ok(record) => {
                    verityflow::output::terminal::display_result(&record);
                    println!("{}", "Analysis complete.".bold());
                }
                Err(e) => {
                    warn!(error = %e, "Analysis failed");
                    println!(
                        "{} Failed to analyze message. Please try again.",
                        "Error:".red()
                    );
                }
            }
        }

        Commands::History { search, limit } => {
            let search = search.unwrap_or_default();

            let pb = spinner("Loading history...");
            let mut controller = HistoryController::new();
            controller.fetch(&client, &search, limit).await?;
            pb.finish_and_clear();

            match controller.state() {
                HistoryState::Failed { message } => {
                    println!("{} {message}", "Error:".red());
                }
                _ => verityflow::output::terminal::display_history(controller.records()),
            }
        }

        Commands::ExportPdf { search } => {
            let search = search.unwrap_or_default();

            let pb = spinner("Loading history...");
            let mut controller = HistoryController::new();
            controller
                .fetch(&client, &search, DEFAULT_HISTORY_LIMIT)
                .await?;
            pb.finish_and_clear();

            if let HistoryState::Failed { message } = controller.state() {
                println!("{} {message}", "Error:".red());
                return Ok(());
            }

            match verityflow::export::pdf::export_pdf(controller.records(), &config.export_dir) {
                Ok(path) => {
                    println!("{}", format!("PDF exported to: {}", path.display()).bold());
                }
                Err(e) => {
                    warn!(error = %e, "PDF export failed");
                    println!("{} Failed to export PDF: {e:#}", "Error:".red());
                }
            }
        }

        Commands::ExportCsv => {
            let pb = spinner("Requesting CSV export...");
            let result = verityflow::export::csv::export_csv(&client, &config.export_dir).await;
            pb.finish_and_clear();

            match result {
                Ok(path) => {
                    println!("{}", format!("CSV exported to: {}", path.display()).bold());
                }
                Err(e) => {
                    warn!(error = %e, "CSV export failed");
                    println!("{} Failed to export CSV: {e:#}", "Error:".red());
                }
            }
        }
    }

    Ok(())
}

/// Resolve the message text from the argument or the clipboard.
/// Returns None after printing a notice when nothing usable is available.
fn resolve_message(message: Option<String>, paste: bool) -> Option<String> {
    if let Some(text) = message {
        return Some(text);
    }
    if paste {
        return match arboard::Clipboard::new().and_then(|mut c| c.get_text()) {
            Ok(text) => {
                println!("Message pasted from clipboard");
                Some(text)
            }
            Err(e) => {
                warn!(error = %e, "Clipboard read failed");
                println!(
                    "{} Failed to read clipboard. Please paste manually.",
                    "Error:".red()
                );
                None
            }
        };
    }
    println!(
        "{} Provide a message argument or use --paste",
        "Error:".red()
    );
    None
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
