/// Punctuation cluster found inside a token.
///
/// Only the first cluster of `[!?;,.]` is recorded; everything after it is
/// dropped from `stripped`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Punctuation {
    /// The first maximal run of punctuation characters (e.g. `"!"`, `"..."`).
    pub run: String,
    /// The characters before the first punctuation character.
    pub stripped: String,
}

/// Per-token working record, filled in stage by stage by the engine.
///
/// One profile exists for every token, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordProfile {
    /// Token text as it appeared in the message.
    pub word: String,
    /// Grammatical tag; empty until tagging runs.
    pub part_of_speech: String,
    /// Set when singularization produced a different form.
    pub plural: bool,
    /// Singular form, only present when `plural` is set.
    pub singular: Option<String>,
    /// Punctuation split, `None` when the token has no `[!?;,.]`.
    pub punctuation: Option<Punctuation>,
    /// Matched pictogram(s); two pictograms separated by a space for plural keyword matches.
    pub emoji: Option<String>,
}

impl WordProfile {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Self::default()
        }
    }

    /// The word without its punctuation cluster.
    pub fn safe_word(&self) -> &str {
        match &self.punctuation {
            Some(p) => &p.stripped,
            None => &self.word,
        }
    }

    /// The singular form when plural, otherwise the raw word.
    ///
    /// Note: the raw word, not `safe_word`, so punctuation stays attached here.
    pub fn singular_form(&self) -> &str {
        match (&self.singular, self.plural) {
            (Some(s), true) => s,
            _ => &self.word,
        }
    }

    /// Punctuation run to re-attach on reconstruction (empty if none).
    pub fn punctuation_run(&self) -> &str {
        self.punctuation.as_ref().map_or("", |p| p.run.as_str())
    }
}

/// A word with the tag the tagger assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    pub word: String,
    pub tag: String,
}

impl TaggedWord {
    pub fn new(word: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            tag: tag.into(),
        }
    }
}

/// One pictogram of the dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    /// Canonical lookup word (e.g. `"cat"`).
    pub key: String,
    /// The pictogram itself; `None` for placeholder entries that end a scan without a pictogram.
    pub char: Option<String>,
    /// Category label (e.g. `"animals_and_nature"`).
    pub category: String,
    /// Keyword synonyms, in dictionary order.
    pub keywords: Vec<String>,
}

impl DictionaryEntry {
    pub fn new(
        key: impl Into<String>,
        char: impl Into<String>,
        category: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            key: key.into(),
            char: Some(char.into()),
            category: category.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    /// An entry with no pictogram.
    pub fn placeholder(
        key: impl Into<String>,
        category: impl Into<String>,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            key: key.into(),
            char: None,
            category: category.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}
