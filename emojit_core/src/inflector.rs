//! `inflector`: noun singularization seam.

use crate::error::InflectError;

/// Maps a noun to its singular form (best effort).
///
/// Returning the input unchanged means "already singular"; an `Err` means the
/// word could not be handled, which callers treat the same way.
pub trait Inflector: Send + Sync {
    fn singularize(&self, word: &str) -> Result<String, InflectError>;
}
