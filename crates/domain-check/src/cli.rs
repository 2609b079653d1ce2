use std::path::PathBuf;

use clap::Parser;
use domain_filter::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// Reads a count-prefixed block-list followed by a count-prefixed list of domains to
/// test, and prints `Bad` or `Good` for every tested domain.
pub struct CheckArgs {
    /// File to read both lists from, stdin if omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// File to write verdicts to, stdout if omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format, `plain` or `json`
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,

    /// Log filter used when `RUST_LOG` is not set
    #[arg(short, long, default_value_t = String::from("info"))]
    pub log_level: String,

    /// Whether to disable logging
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

impl CheckArgs {
    pub fn from_env() -> Self {
        Self::parse()
    }
}
