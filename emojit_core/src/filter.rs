//! `filter`: decide which words may be replaced by a pictogram.

use crate::model::WordProfile;

/// Tags excluded by the classic filter: base verbs, possessive pronouns,
/// adverbs, the infinitive "to" and third-person singular verbs.
pub const CLASSIC_EXCLUDED_TAGS: &[&str] = &["VB", "PRP$", "RB", "TO", "VBZ"];

/// Classic set plus determiners.
pub const DEFAULT_EXCLUDED_TAGS: &[&str] = &["VB", "PRP$", "RB", "TO", "VBZ", "DT"];

/// Filter: eligibility check run before matching.
pub trait Filter: Send + Sync {
    fn should_match(&self, profile: &WordProfile) -> bool;
}

/// Default filter: reject words whose tag is in a fixed list (exact string match).
#[derive(Debug, Clone)]
pub struct ExcludedTags {
    pub tags: Vec<String>,
}

impl ExcludedTags {
    pub fn new(tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// The set without determiners.
    pub fn classic() -> Self {
        Self::new(CLASSIC_EXCLUDED_TAGS.iter().copied())
    }
}

impl Default for ExcludedTags {
    fn default() -> Self {
        Self::new(DEFAULT_EXCLUDED_TAGS.iter().copied())
    }
}

impl Filter for ExcludedTags {
    fn should_match(&self, profile: &WordProfile) -> bool {
        !self.tags.iter().any(|t| *t == profile.part_of_speech)
    }
}
