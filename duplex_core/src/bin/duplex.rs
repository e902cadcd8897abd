//! Duplex CLI entry point.
//!
//! Compares two files and prints the classified comparison.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, ValueEnum};
use duplex_core::{CompareRequest, ComparisonConfig, ComparisonSession, EngineService};
use env_logger::Env;

#[derive(Parser, Debug)]
#[command(name = "duplex")]
#[command(version)]
#[command(about = "Side-by-side comparison of two text documents", long_about = None)]
struct Args {
    /// Document shown on the left (side A)
    #[arg(required_unless_present = "list_engines")]
    left: Option<Utf8PathBuf>,

    /// Document shown on the right (side B)
    #[arg(required_unless_present = "list_engines")]
    right: Option<Utf8PathBuf>,

    /// Configuration file (falls back to $DUPLEX_CONFIG_PATH)
    #[arg(short, long)]
    config: Option<Utf8PathBuf>,

    /// Diff engine to use instead of the configured one
    #[arg(short, long)]
    engine: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Summary)]
    format: Format,

    /// List the available diff engines and exit
    #[arg(long)]
    list_engines: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    /// The JSON response served to clients
    Json,
    /// A standalone HTML document
    Html,
    /// Plain text of both sides
    Text,
    /// Statistics and change log
    Summary,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut config =
        ComparisonConfig::load(args.config.as_deref()).context("failed to load configuration")?;
    if let Some(engine) = args.engine {
        config.engine = engine;
    }

    if args.list_engines {
        for summary in EngineService::with_algorithm(config.algorithm).summaries() {
            println!("{}\t{}", summary.id, summary.label);
        }
        return Ok(());
    }

    let session = ComparisonSession::new(&config).context("failed to start comparison")?;
    let (Some(left), Some(right)) = (args.left, args.right) else {
        anyhow::bail!("two documents are required");
    };
    let request = CompareRequest::new(read_document(&left)?, read_document(&right)?);

    match args.format {
        Format::Json => {
            let response = session.respond(&request)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Format::Html => {
            let result = session.compare(&request.text_a, &request.text_b)?;
            println!("{}", session.renderer().html_document(&result));
        }
        Format::Text => {
            let result = session.compare(&request.text_a, &request.text_b)?;
            println!("{}", session.renderer().text_report(&result));
        }
        Format::Summary => {
            let result = session.compare(&request.text_a, &request.text_b)?;
            let stats = result.stats();
            println!(
                "Differences: {} | Added: {} | Removed: {}",
                stats.differences, stats.words_added, stats.words_removed
            );
            for entry in &result.change_summary {
                println!("{entry}");
            }
        }
    }

    Ok(())
}

fn read_document(path: &Utf8Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
}
