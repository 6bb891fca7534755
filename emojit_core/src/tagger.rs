//! `tagger`: part-of-speech tagging seam.

use crate::model::TaggedWord;

/// Assigns a grammatical tag to each word of a sentence.
///
/// Contract: exactly one `TaggedWord` per input word, in input order. The
/// engine zips the result positionally and performs no alignment check.
pub trait Tagger: Send + Sync {
    fn tag(&self, words: &[&str]) -> Vec<TaggedWord>;
}
