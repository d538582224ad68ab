//! # qvision
//!
//! Replay a recorded Q-VISION session and inspect or export the result.
//!
//! ## Usage
//!
//! ```bash
//! # Render the selected report to qvision-report.html
//! qvision render session.json
//!
//! # Print the selected report as JSON
//! qvision select session.json
//!
//! # Show the navigation surface after replay
//! qvision nav session.json
//! ```

mod config;

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qvision_core::{AppState, ReportView, Session};
use qvision_report::render_report;
use serde_json::json;
use tracing::{debug, info};

use config::{DEFAULT_CONFIG_FILE, QvisionConfig};

#[derive(Parser, Debug)]
#[command(name = "qvision")]
#[command(about = "Replay Q-VISION sessions and export report pages")]
#[command(version)]
struct Cli {
    /// Config file (missing file means defaults)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a session and render the report view to HTML
    Render {
        /// Session file (JSON array of events, or {"events": [...]})
        session: PathBuf,
        /// Output file; `-` writes to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Override the document title
        #[arg(long)]
        title: Option<String>,
        /// Leave the correlation heatmap out of scan reports
        #[arg(long)]
        no_heatmap: bool,
    },
    /// Replay a session and print the selected report as JSON
    Select {
        session: PathBuf,
    },
    /// Replay a session and print the navigation entries
    Nav {
        session: PathBuf,
        /// Print entries as JSON
        #[arg(long)]
        json: bool,
    },
}

fn load_session(path: &Path) -> Result<AppState> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session {}", path.display()))?;
    let session = Session::from_json(&raw)
        .with_context(|| format!("Invalid session file {}", path.display()))?;
    debug!(path = %path.display(), events = session.len(), "session loaded");
    Ok(session.replay())
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    let config = QvisionConfig::load_from_path(&cli.config);

    match cli.command {
        Command::Render {
            session,
            output,
            title,
            no_heatmap,
        } => {
            let state = load_session(&session)?;
            let mut options = config.report;
            if let Some(title) = title {
                options.title = title;
            }
            if no_heatmap {
                options.include_heatmap = false;
            }

            let html = render_report(&state, &options);
            let output = output.unwrap_or(config.output);
            if output.as_os_str() == "-" {
                std::io::stdout()
                    .write_all(html.as_bytes())
                    .context("Failed to write report to stdout")?;
            } else {
                if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                    fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
                fs::write(&output, html)
                    .with_context(|| format!("Failed to write {}", output.display()))?;
                info!(path = %output.display(), "report written");
                println!("Report written to {}", output.display());
            }
        }
        Command::Select { session } => {
            let state = load_session(&session)?;
            let value = match state.report_view() {
                ReportView::Ready(report) => serde_json::to_value(report.to_data())?,
                ReportView::Empty => json!({ "kind": null }),
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Command::Nav { session, json } => {
            let state = load_session(&session)?;
            let entries = state.nav_entries();
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in entries {
                    let marker = if entry.active { "*" } else { " " };
                    println!("{marker} {:<8} {}", entry.view.slug(), entry.label);
                }
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[qvision] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
