use std::io::BufRead;

use tracing::trace;

use crate::{
    domain::Domain,
    error::{Error, Result},
};

/// Reads count-prefixed domain lists from a line oriented source:
///
/// ```text
/// 3
/// gdz.ru
/// abc.gdz.ru
/// maps.me
/// ```
#[derive(Debug)]
pub struct DomainReader<R: BufRead> {
    inner: R,
    /// Number of lines consumed so far
    line: usize,
    buf: String,
}

impl<R: BufRead> DomainReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            line: 0,
            buf: String::new(),
        }
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    fn next_line(&mut self) -> Result<Option<&str>> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some(self.buf.trim()))
    }

    /// Reads a line holding the number of entries that follow.
    pub fn read_count(&mut self) -> Result<usize> {
        let text = match self.next_line()? {
            Some(text) => text.to_owned(),
            None => {
                return Err(Error::UnexpectedEof {
                    expected: 1,
                    found: 0,
                })
            }
        };

        text.parse().map_err(|_| Error::InvalidCount {
            line: self.line,
            text,
        })
    }

    /// Reads exactly `count` domains, one per line.
    ///
    /// Fails on the first malformed line, reporting its 1-based position within the list.
    pub fn read_domains(&mut self, count: usize) -> Result<Vec<Domain>> {
        // cap the up-front allocation, the count comes from untrusted input
        let mut domains = Vec::with_capacity(count.min(1 << 16));
        for index in 1..=count {
            let domain = match self.next_line()? {
                Some(text) => Domain::parse(text).map_err(|e| e.at_position(index))?,
                None => {
                    return Err(Error::UnexpectedEof {
                        expected: count,
                        found: index - 1,
                    })
                }
            };
            trace!(line = self.line, %domain, "Read domain");
            domains.push(domain);
        }
        Ok(domains)
    }

    /// Reads a count line followed by that many domains.
    pub fn read_list(&mut self) -> Result<Vec<Domain>> {
        let count = self.read_count()?;
        self.read_domains(count)
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
