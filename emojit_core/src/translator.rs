//! `translator`: find the pictogram for one word profile.
//!
//! Current implementation:
//! - `DictTranslator`: linear scan over `Dictionary::entries`, first match wins:
//!   - entries whose keywords contain an excluded script keyword are skipped
//!   - canonical key vs. safe word, then vs. singular form
//!   - keywords in order vs. safe word, then vs. singular form (doubled when plural)
//!   - a matching entry without a pictogram ends the scan with no result

use crate::{dictionary::Dictionary, model::WordProfile};

/// Keyword marking entries written in a script we do not translate into.
pub const DEFAULT_EXCLUDED_KEYWORDS: &[&str] = &["kanji"];

/// Translator: maps one profile to its pictogram, if any.
pub trait Translator: Send + Sync {
    fn translate(&self, profile: &WordProfile) -> Option<String>;
}

/// Dictionary-backed translator.
pub struct DictTranslator<'a, D> {
    /// Dictionary reference (lookups happen here)
    pub dict: &'a D,
    /// Entries whose keyword list contains any of these are ignored
    pub excluded_keywords: &'a [String],
}

impl<'a, D> DictTranslator<'a, D>
where
    D: Dictionary,
{
    pub fn match_profile(&self, profile: &WordProfile) -> Option<String> {
        let word = profile.safe_word().to_lowercase();
        let singular_form = profile.singular_form().to_lowercase();

        for entry in self.dict.entries() {
            if entry
                .keywords
                .iter()
                .any(|k| self.excluded_keywords.iter().any(|x| x == k))
            {
                continue;
            }
            if word == entry.key || singular_form == entry.key {
                return entry.char.clone();
            }
            for keyword in &entry.keywords {
                if word == *keyword {
                    return entry.char.clone();
                }
                if singular_form == *keyword {
                    if profile.plural {
                        return entry.char.as_ref().map(|c| format!("{c} {c}"));
                    }
                    return entry.char.clone();
                }
            }
        }

        None
    }
}

impl<'a, D> Translator for DictTranslator<'a, D>
where
    D: Dictionary,
{
    fn translate(&self, profile: &WordProfile) -> Option<String> {
        self.match_profile(profile)
    }
}
