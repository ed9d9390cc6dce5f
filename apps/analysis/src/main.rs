use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use serde_json::json;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Analyzes one interview transcript segment and prints the JSON report.
#[derive(Parser, Debug)]
#[command(name = "analysis", version, about)]
struct Cli {
    /// Transcript file to analyze; reads stdin when omitted
    path: Option<PathBuf>,

    /// Measured speech duration in seconds, for speaking-pace calculation
    #[arg(long)]
    duration: Option<f64>,

    /// Timestamp echoed into the report envelope (epoch milliseconds);
    /// defaults to now
    #[arg(long)]
    timestamp: Option<i64>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Structured logging on stderr; stdout stays valid JSON.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}=info", env!("CARGO_PKG_NAME")))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let text = match &cli.path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript from {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read transcript from stdin")?;
            buffer
        }
    };

    let timestamp = json!(cli
        .timestamp
        .unwrap_or_else(|| Utc::now().timestamp_millis()));

    info!("analyzing transcript segment ({} bytes)", text.len());
    let report = analysis::analyze_comprehensive(&text, timestamp, cli.duration, None);

    let rendered = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{rendered}");

    Ok(())
}
