//! `punctuation`: detect the `[!?;,.]` cluster of a token.
//!
//! Only the first cluster is recognized. For `"wait...what?"` the run is
//! `"..."` and the stripped word is `"wait"`; the tail is not kept.

use lazy_static::lazy_static;
use regex::Regex;

use crate::model::{Punctuation, WordProfile};

lazy_static! {
    static ref PUNCTUATION_RUN: Regex = Regex::new(r"[!?;,.]+").unwrap();
}

/// Split a single word into its first punctuation run and the prefix before it.
pub fn split_punctuation(word: &str) -> Option<Punctuation> {
    let m = PUNCTUATION_RUN.find(word)?;
    Some(Punctuation {
        run: m.as_str().to_string(),
        stripped: word[..m.start()].to_string(),
    })
}

/// Fill `punctuation` for every profile whose word carries `[!?;,.]`.
pub fn check_punctuation(profiles: &mut [WordProfile]) {
    for profile in profiles.iter_mut() {
        if let Some(p) = split_punctuation(&profile.word) {
            profile.punctuation = Some(p);
        }
    }
}
