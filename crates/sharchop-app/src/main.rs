use anyhow::Context;
use clap::Parser;
use sharchop_config::Config;
use sharchop_core::{MediaLocator, load_table};
use sharchop_voice::DisabledTranscriber;
use tracing_subscriber::EnvFilter;

mod repl;
mod session;

#[cfg(test)]
mod tests;

/// Bidirectional Tshangla-English phrase lookup with fuzzy matching
#[derive(Parser)]
#[command(name = "sharchop", version)]
struct Cli {
    /// Spreadsheet dataset (.xlsx, retried with the .xls reader)
    #[arg(long)]
    dataset: Option<String>,

    /// Delimited-text dataset, tried when both spreadsheet readers fail
    #[arg(long)]
    csv: Option<String>,

    /// Directory containing Tshangla_Audio/ and English_Audio/
    #[arg(long)]
    audio_root: Option<String>,

    /// Similarity score the best candidate must exceed, 0-100
    #[arg(long)]
    threshold: Option<u8>,

    /// How many ranked candidates to keep per query
    #[arg(long)]
    candidates: Option<usize>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = Config::new();
    if let Some(path) = cli.dataset {
        config.dataset.spreadsheet_path = path;
    }
    if let Some(path) = cli.csv {
        config.dataset.csv_path = path;
    }
    if let Some(root) = cli.audio_root {
        config.audio.root = root;
    }
    if let Some(threshold) = cli.threshold {
        config.matcher.threshold = threshold;
    }
    if let Some(candidates) = cli.candidates {
        config.matcher.candidates = candidates;
    }

    // Fatal: without a table there is nothing to match against
    let table = load_table(&config.dataset).context("could not load the phrase table")?;

    let locator = MediaLocator::new(config.audio.root.clone());
    let transcriber = DisabledTranscriber;

    repl::run(&table, &locator, &config, &transcriber)
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Logs go to stderr so they never interleave with REPL output
    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(atty::is(atty::Stream::Stderr))
            .with_writer(std::io::stderr)
            .init();
    }
}
