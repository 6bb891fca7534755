//! `segmenter`: split a message into tokens and seed one `WordProfile` per token.
//!
//! Splitting is on the single ASCII space only:
//! - consecutive spaces produce empty tokens, which are kept
//! - hyphens/apostrophes stay inside their word
//! - punctuation is handled per token later (see `punctuation`)

use crate::model::WordProfile;

/// Split `message` on `' '`, keeping empty tokens.
pub fn tokenize(message: &str) -> Vec<&str> {
    message.split(' ').collect()
}

/// One fresh profile per token, in order.
pub fn build_profiles(tokens: &[&str]) -> Vec<WordProfile> {
    tokens.iter().map(|t| WordProfile::new(*t)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn splits_on_single_spaces_only() {
        assert_eq!(tokenize("I love cats!"), vec!["I", "love", "cats!"]);
        assert_eq!(tokenize("a  b"), vec!["a", "", "b"]);
        assert_eq!(tokenize("a\tb"), vec!["a\tb"]);
    }

    #[test]
    fn empty_message_is_one_empty_token() {
        assert_eq!(tokenize(""), vec![""]);
    }

    #[test]
    fn keeps_word_internal_characters() {
        assert_eq!(tokenize("don't mother-in-law"), vec!["don't", "mother-in-law"]);
    }

    #[test]
    fn profiles_follow_token_order() {
        let profiles = build_profiles(&tokenize("one two"));
        assert_eq!(profiles.len(), 2);
        assert_eq!(profiles[0].word, "one");
        assert_eq!(profiles[1].word, "two");
        assert!(profiles.iter().all(|p| p.emoji.is_none() && p.part_of_speech.is_empty()));
    }
}
