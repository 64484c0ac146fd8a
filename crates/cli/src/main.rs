//! Command-line surface for the triage pipeline.
//!
//! Reads a JSON payload in any recognized upstream envelope shape from a
//! file or stdin, runs the analysis, and prints the result as JSON on
//! stdout. Logs go to stderr so the output stays pipeable.

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use triage_core::{analyze, envelope, AssessmentSubmission};

#[derive(Parser)]
#[command(name = "triage")]
#[command(about = "Patient vitals risk triage")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a batch of raw patient records
    Analyze {
        /// JSON file holding the patient batch; stdin when omitted
        file: Option<PathBuf>,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
        /// Print the outbound assessment submission instead of the full analysis
        #[arg(long)]
        submission: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("triage=info".parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            file,
            pretty,
            submission,
        } => {
            let text = read_input(file.as_deref())?;
            let payload: serde_json::Value =
                serde_json::from_str(&text).context("input is not valid JSON")?;

            let records = envelope::extract_records(&payload);
            tracing::info!(records = records.len(), "loaded patient batch");

            let output = analyze(&records);

            let rendered = if submission {
                render(&AssessmentSubmission::from(&output), pretty)?
            } else {
                render(&output, pretty)?
            };
            println!("{rendered}");
        }
    }

    Ok(())
}

fn read_input(file: Option<&std::path::Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn render<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(rendered)
}
