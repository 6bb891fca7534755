//! Wiring for front ends: build a ready-to-use translator from configuration.
//!
//! ```no_run
//! let translator = emojit_cli::initialize(&emojit_cli::TranslatorConfig::default())?;
//! assert_eq!(translator.translate(""), "");
//! # Ok::<(), emojit_cli::ResourceLoadError>(())
//! ```

use std::path::PathBuf;

use emojit_core::{
    dictionary::Dictionary,
    engine::Engine,
    filter::{DEFAULT_EXCLUDED_TAGS, ExcludedTags},
    translator::DEFAULT_EXCLUDED_KEYWORDS,
};
use emojit_dict::{DictionaryError, JsonDictionary};
use emojit_tagger::{BrillTagger, DEFAULT_CATEGORY, Lexicon, NounInflector, RuleSet, TaggerError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// The translator handle: immutable once built, shareable across threads.
pub type TranslatorHandle = Engine<JsonDictionary, BrillTagger, NounInflector>;

#[derive(Debug, Error)]
pub enum ResourceLoadError {
    #[error(transparent)]
    Tagger(#[from] TaggerError),

    #[error("bundled dictionary is unusable: {0}")]
    Dictionary(#[from] DictionaryError),
}

/// Where resources come from and how words are filtered.
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Custom dictionary; `None` or an unusable file means the bundled one
    pub dictionary: Option<PathBuf>,
    /// Custom tagger lexicon; must be readable when set
    pub lexicon: Option<PathBuf>,
    /// Custom tagger rules; must be readable when set
    pub rules: Option<PathBuf>,
    /// Tag for words missing from the lexicon
    pub default_category: String,
    /// Tags never replaced by a pictogram
    pub excluded_tags: Vec<String>,
    /// Dictionary entries carrying any of these keywords are ignored
    pub excluded_keywords: Vec<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            dictionary: None,
            lexicon: None,
            rules: None,
            default_category: DEFAULT_CATEGORY.to_string(),
            excluded_tags: DEFAULT_EXCLUDED_TAGS.iter().map(|s| s.to_string()).collect(),
            excluded_keywords: DEFAULT_EXCLUDED_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Load dictionary and tagger resources and assemble the engine.
///
/// Tagger resources are required; the dictionary falls back to the bundled one.
pub fn initialize(config: &TranslatorConfig) -> Result<TranslatorHandle, ResourceLoadError> {
    let lexicon = match &config.lexicon {
        Some(path) => Lexicon::from_path(path, &config.default_category)?,
        None => Lexicon::bundled_with_default(&config.default_category)?,
    };
    let rules = match &config.rules {
        Some(path) => RuleSet::from_path(path)?,
        None => RuleSet::bundled()?,
    };
    let dictionary = JsonDictionary::load_or_bundled(config.dictionary.as_deref())?;
    info!(
        words = lexicon.len(),
        rules = rules.len(),
        entries = dictionary.len(),
        "translator ready"
    );

    Ok(Engine::new(dictionary, BrillTagger::new(lexicon, rules), NounInflector::new())
        .excluded_tags(ExcludedTags::new(config.excluded_tags.iter().cloned()))
        .excluded_keywords(config.excluded_keywords.iter().cloned()))
}

/// Request body accepted by a translation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub message: String,
}

/// Response body: `{"response": "ok", "translation": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub response: String,
    pub translation: String,
}

impl TranslateResponse {
    pub fn ok(translation: String) -> Self {
        Self {
            response: "ok".to_string(),
            translation,
        }
    }
}

/// Answer one request with the given translator.
pub fn respond(translator: &TranslatorHandle, request: &TranslateRequest) -> TranslateResponse {
    TranslateResponse::ok(translator.translate(&request.message))
}
