// ============================================================================
// decimal-strings CLI
// Reads pairs of numerals per line and prints their sum or difference
// ============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use decimal_strings::prelude::*;
use decimal_strings::utils::init_cli_logger;
use parking_lot::Mutex;
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(name = "decimal-strings")]
#[command(about = "Adds (or subtracts) pairs of arbitrary-precision decimals, one pair per line")]
struct Cli {
    /// Input file; prompted for on stdin when omitted
    file: Option<PathBuf>,

    /// Compute `a - b` instead of `a + b`
    #[arg(long)]
    subtract: bool,

    /// Worker threads used to evaluate lines
    #[arg(long, short = 'j', default_value = "1")]
    jobs: usize,

    /// Skip blank lines instead of reporting them as invalid
    #[arg(long)]
    skip_blank: bool,

    /// Print one JSON object per line
    #[arg(long)]
    json: bool,

    #[arg(long, short, help = "Enable verbose output")]
    verbose: bool,
}

impl Cli {
    fn batch_config(&self) -> BatchConfig {
        let operation = if self.subtract {
            Operation::Subtract
        } else {
            Operation::Add
        };

        BatchConfig::new()
            .with_operation(operation)
            .with_workers(self.jobs)
            .with_skip_blank_lines(self.skip_blank)
    }
}

/// Writes each outcome as soon as it is handed over: `\n<outcome>\n` as
/// text, or one JSON object per line
struct PrintingOutcomeHandler<W> {
    out: Mutex<W>,
    json: bool,
}

impl<W: Write> PrintingOutcomeHandler<W> {
    fn new(out: W, json: bool) -> Self {
        Self {
            out: Mutex::new(out),
            json,
        }
    }
}

impl<W: Write + Send> OutcomeHandler for PrintingOutcomeHandler<W> {
    fn on_outcome(&self, outcome: &LineOutcome) {
        let mut out = self.out.lock();
        let written = if self.json {
            match serde_json::to_string(outcome) {
                Ok(line) => writeln!(out, "{line}"),
                Err(e) => {
                    tracing::error!(
                        line = outcome.line_number,
                        error = %e,
                        "could not encode outcome"
                    );
                    return;
                },
            }
        } else {
            write!(out, "\n{outcome}\n")
        };

        if let Err(e) = written.and_then(|_| out.flush()) {
            tracing::error!(error = %e, "could not write outcome");
        }
    }
}

fn open_input(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("Error opening file: {}", path.display()))
}

fn prompt_filename() -> Result<PathBuf> {
    print!("Enter the filename: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("could not read filename from stdin")?;
    Ok(PathBuf::from(input.trim()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = cli.batch_config();
    let handler = Arc::new(PrintingOutcomeHandler::new(io::stdout(), cli.json));
    let processor = BatchProcessor::new(config, handler).context("invalid options")?;

    let path = match &cli.file {
        Some(path) => path.clone(),
        None => prompt_filename()?,
    };

    let file = open_input(&path)?;

    let (_, summary) = processor
        .summarize_reader(BufReader::new(file))
        .with_context(|| format!("Error reading file: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        lines = summary.lines_read,
        evaluated = summary.evaluated,
        invalid = summary.invalid,
        "done"
    );

    Ok(())
}
