use std::{fs, io, path::Path, path::PathBuf};

use emojit_core::{dictionary::Dictionary, model::DictionaryEntry};
use indexmap::IndexMap;
use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

const BUNDLED_DICTIONARY: &str = include_str!("../asset/emoji.json");

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("malformed dictionary: {0}")]
    Json(#[from] serde_json::Error),

    #[error("dictionary has no usable entries")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct RawEntry {
    #[serde(default)]
    keywords: Vec<String>,
    char: Option<String>,
    #[serde(default)]
    category: String,
}

/// emojilib-style JSON dictionary:
///
/// - `{"cat": {"keywords": ["animal", "meow"], "char": "🐱", "category": "animals_and_nature"}, ...}`
/// - object order is the matching order (first match wins)
/// - entries whose `char` is null stay in place: matching one ends the scan with no pictogram
/// - extra fields (e.g. `fitzpatrick_scale`) are ignored
pub struct JsonDictionary {
    entries: Vec<DictionaryEntry>,
}

impl JsonDictionary {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&s)
    }

    pub fn from_json_str(s: &str) -> Result<Self, DictionaryError> {
        let raw: IndexMap<String, RawEntry> = serde_json::from_str(s)?;
        let entries: Vec<DictionaryEntry> = raw
            .into_iter()
            .map(|(key, e)| DictionaryEntry {
                key,
                char: e.char.filter(|c| !c.is_empty()),
                category: e.category,
                keywords: e.keywords,
            })
            .collect();
        if entries.iter().all(|e| e.char.is_none()) {
            return Err(DictionaryError::Empty);
        }
        Ok(Self { entries })
    }

    /// The dictionary shipped with the crate.
    pub fn bundled() -> Result<Self, DictionaryError> {
        Self::from_json_str(BUNDLED_DICTIONARY)
    }

    /// Load `path` if given; a missing or malformed file falls back to the bundled dictionary.
    ///
    /// Only a broken bundled dictionary is reported as an error.
    pub fn load_or_bundled(path: Option<&Path>) -> Result<Self, DictionaryError> {
        let Some(path) = path else {
            return Self::bundled();
        };
        match Self::from_path(path) {
            Ok(dict) => {
                info!(path = %path.display(), entries = dict.len(), "loaded dictionary");
                Ok(dict)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "falling back to bundled dictionary");
                Self::bundled()
            }
        }
    }
}

impl Dictionary for JsonDictionary {
    fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use pretty_assertions::assert_eq;

    const SMALL: &str = r#"{
        "zebra": {"keywords": ["stripes"], "char": "🦓", "category": "animals"},
        "cat": {"keywords": ["cats", "feline"], "char": "🐱", "fitzpatrick_scale": false, "category": "animals"},
        "ghost": {"keywords": ["boo"], "char": null, "category": "_custom"},
        "apple": {"char": "🍎"}
    }"#;

    #[test]
    fn keeps_file_order_and_charless_entries() {
        let d = JsonDictionary::from_json_str(SMALL).unwrap();
        let keys: Vec<&str> = d.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["zebra", "cat", "ghost", "apple"]);
        assert_eq!(
            d.entries()[1],
            DictionaryEntry::new("cat", "🐱", "animals", ["cats", "feline"])
        );
        assert_eq!(
            d.entries()[2],
            DictionaryEntry::placeholder("ghost", "_custom", ["boo"])
        );
        assert!(d.entries()[3].keywords.is_empty());
        assert_eq!(d.entries()[3].category, "");
    }

    #[test]
    fn malformed_and_empty_inputs_are_errors() {
        assert!(matches!(JsonDictionary::from_json_str("[1, 2"), Err(DictionaryError::Json(_))));
        assert!(matches!(JsonDictionary::from_json_str("{}"), Err(DictionaryError::Empty)));
        assert!(matches!(
            JsonDictionary::from_json_str(r#"{"x": {"char": null}}"#),
            Err(DictionaryError::Empty)
        ));
    }

    #[test]
    fn bundled_dictionary_parses() {
        let d = JsonDictionary::bundled().unwrap();
        assert!(d.len() > 100);
        assert!(d.entries().iter().any(|e| e.key == "cat" && e.char.as_deref() == Some("🐱")));
    }

    #[test]
    fn load_or_bundled_uses_given_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(SMALL.as_bytes()).unwrap();
        let d = JsonDictionary::load_or_bundled(Some(f.path())).unwrap();
        assert_eq!(d.len(), 4);
    }

    #[test]
    fn load_or_bundled_falls_back_on_corrupt_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"{\"cat\": {\"char\": ").unwrap();
        let d = JsonDictionary::load_or_bundled(Some(f.path())).unwrap();
        assert_eq!(d.len(), JsonDictionary::bundled().unwrap().len());
    }

    #[test]
    fn load_or_bundled_falls_back_on_missing_file() {
        let d = JsonDictionary::load_or_bundled(Some(Path::new("/no/such/emoji.json"))).unwrap();
        assert!(d.entries().iter().any(|e| e.key == "pizza"));
    }
}
