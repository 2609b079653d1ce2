//! Decides whether domains fall under a block-list, where a domain is blocked by an
//! entry if it is that entry or any of its subdomains (`a.b.gdz.ru` by `gdz.ru`).

pub mod domain;
pub mod error;
pub mod filter;
pub mod input;
pub mod verdict;

use std::io::{BufRead, Write};

use tracing::trace;

pub use domain::Domain;
pub use error::{Error, Result};
pub use filter::Blocklist;
pub use input::DomainReader;
pub use verdict::{OutputFormat, Verdict, VerdictWriter};

/// Counters describing one run of [`check_stream`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// Block-list entries as read, duplicates and subdomains included
    pub blocked_raw: usize,
    /// Entries left in the index after pruning
    pub blocked_minimal: usize,
    pub queries: usize,
    pub forbidden: usize,
}

/// Reads a block-list and a query list from `input` and writes one verdict per query
/// to `output`, in query order.
pub fn check_stream<R: BufRead, W: Write>(
    input: R,
    output: W,
    format: OutputFormat,
) -> Result<Summary> {
    let mut reader = DomainReader::new(input);

    let blocked = reader.read_list()?;
    let blocked_raw = blocked.len();
    let blocklist = Blocklist::new(blocked);

    let queries = reader.read_list()?;
    let mut writer = VerdictWriter::new(output, format);
    let mut forbidden = 0;
    for domain in &queries {
        let verdict = blocklist.verdict(domain);
        trace!(%domain, %verdict, "Checked domain");
        if verdict.is_forbidden() {
            forbidden += 1;
        }
        writer.write(domain, verdict)?;
    }
    writer.flush()?;

    Ok(Summary {
        blocked_raw,
        blocked_minimal: blocklist.len(),
        queries: writer.written(),
        forbidden,
    })
}
