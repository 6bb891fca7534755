//! Word -> candidate tags table.
//!
//! JSON format: `{"word": ["NN", "VB"], ...}`. The first tag is the one the
//! tagger starts from; unknown words get the default category.

use std::{collections::HashMap, fs, path::Path};

use tracing::info;

use crate::error::TaggerError;

/// Category given to words missing from the lexicon.
pub const DEFAULT_CATEGORY: &str = "N";

const BUNDLED_LEXICON: &str = include_str!("../asset/lexicon.json");

pub struct Lexicon {
    words: HashMap<String, Vec<String>>,
    default_category: String,
}

impl Lexicon {
    pub fn from_path(path: impl AsRef<Path>, default_category: &str) -> Result<Self, TaggerError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| TaggerError::Io {
            what: "lexicon",
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_json_str(&s, default_category)?;
        info!(path = %path.display(), words = lexicon.len(), "loaded lexicon");
        Ok(lexicon)
    }

    pub fn from_json_str(s: &str, default_category: &str) -> Result<Self, TaggerError> {
        let mut words: HashMap<String, Vec<String>> = serde_json::from_str(s)?;
        words.retain(|_, tags| !tags.is_empty());
        Ok(Self {
            words,
            default_category: default_category.to_string(),
        })
    }

    /// The lexicon shipped with the crate.
    pub fn bundled() -> Result<Self, TaggerError> {
        Self::bundled_with_default(DEFAULT_CATEGORY)
    }

    pub fn bundled_with_default(default_category: &str) -> Result<Self, TaggerError> {
        Self::from_json_str(BUNDLED_LEXICON, default_category)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Initial tag: exact word first, then its lowercase form, then the default category.
    pub fn tag_word(&self, word: &str) -> &str {
        self.words
            .get(word)
            .or_else(|| self.words.get(&word.to_lowercase()))
            .and_then(|tags| tags.first())
            .map_or(self.default_category.as_str(), String::as_str)
    }
}
