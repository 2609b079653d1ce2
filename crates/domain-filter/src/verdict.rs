use std::{fmt, io::Write, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{domain::Domain, error::Result};

/// The answer for a single queried domain.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Allowed, not covered by any block-list entry
    Good,
    /// Forbidden
    Bad,
}

impl Verdict {
    pub fn is_forbidden(self) -> bool {
        matches!(self, Verdict::Bad)
    }
}

impl From<bool> for Verdict {
    /// `true` means forbidden.
    fn from(forbidden: bool) -> Self {
        if forbidden {
            Verdict::Bad
        } else {
            Verdict::Good
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Good => "Good",
            Verdict::Bad => "Bad",
        })
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// One bare `Good`/`Bad` token per line
    #[default]
    Plain,
    /// One JSON object per line, `{"domain":"gdz.ru","verdict":"Bad"}`
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format {other:?}, expected plain or json")),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonRecord {
    domain: String,
    verdict: Verdict,
}

/// Writes verdicts line by line, in the order they are handed in.
#[derive(Debug)]
pub struct VerdictWriter<W: Write> {
    inner: W,
    format: OutputFormat,
    written: usize,
}

impl<W: Write> VerdictWriter<W> {
    pub fn new(inner: W, format: OutputFormat) -> Self {
        Self {
            inner,
            format,
            written: 0,
        }
    }

    pub fn write(&mut self, domain: &Domain, verdict: Verdict) -> Result<()> {
        match self.format {
            OutputFormat::Plain => writeln!(self.inner, "{verdict}")?,
            OutputFormat::Json => {
                let record = JsonRecord {
                    domain: domain.to_string(),
                    verdict,
                };
                serde_json::to_writer(&mut self.inner, &record)?;
                self.inner.write_all(b"\n")?;
            }
        }
        self.written += 1;
        Ok(())
    }

    pub fn written(&self) -> usize {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
