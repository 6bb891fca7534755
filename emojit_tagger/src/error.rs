//! Errors raised while loading tagger resources.

use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("failed to read {what} from {}: {source}", .path.display())]
    Io {
        what: &'static str,
        path: PathBuf,
        source: io::Error,
    },

    #[error("malformed lexicon: {0}")]
    Lexicon(#[from] serde_json::Error),

    #[error("rule set line {line}: {reason}")]
    Rule { line: usize, reason: String },
}
