//! Error types for the pipeline's pluggable parts.

use thiserror::Error;

/// Why a word could not be singularized.
///
/// The engine treats every variant the same way: the word is considered singular.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InflectError {
    #[error("cannot inflect an empty word")]
    EmptyWord,

    #[error("'{word}' has no alphabetic characters")]
    NotAWord { word: String },
}
