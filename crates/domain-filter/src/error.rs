use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A raw string that does not decompose into non-empty dot-separated labels.
    /// `position` is the 1-based index within the list it was read from, if any.
    #[error("malformed domain {domain:?}{}: {reason}", fmt_position(.position))]
    MalformedDomain {
        domain: String,
        position: Option<usize>,
        reason: &'static str,
    },

    #[error("invalid domain count on line {line}: {text:?}")]
    InvalidCount { line: usize, text: String },

    #[error("unexpected end of input: expected {expected} lines, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Attaches the list position to a `MalformedDomain` error, other variants pass through.
    pub(crate) fn at_position(self, index: usize) -> Self {
        match self {
            Error::MalformedDomain { domain, reason, .. } => Error::MalformedDomain {
                domain,
                position: Some(index),
                reason,
            },
            other => other,
        }
    }
}

fn fmt_position(position: &Option<usize>) -> String {
    position
        .map(|p| format!(" at position {p}"))
        .unwrap_or_default()
}
