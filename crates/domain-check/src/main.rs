mod cli;

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
    time::Instant,
};

use anyhow::{Context, Result};
use cli::CheckArgs;
use tracing::info;

fn main() -> Result<()> {
    let args = CheckArgs::from_env();
    setup_logging(&args);

    let started_at = Instant::now();
    let input = open_input(args.input.as_deref())?;
    let output = open_output(args.output.as_deref())?;

    let summary = domain_filter::check_stream(input, output, args.format)
        .context("Failed to check domains")?;

    info!(
        blocked = summary.blocked_raw,
        minimal = summary.blocked_minimal,
        queries = summary.queries,
        forbidden = summary.forbidden,
        "Checked domains [{}ms]",
        started_at.elapsed().as_millis()
    );
    Ok(())
}

/// Sets up the tracing subscriber. Logs go to stderr, stdout only carries verdicts.
fn setup_logging(args: &CheckArgs) {
    if args.quiet {
        return;
    }

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>> {
    Ok(match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Could not open input file {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    })
}

fn open_output(path: Option<&Path>) -> Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Could not create output file {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}
