use tracing::debug;

use crate::dictionary::Dictionary;
use crate::filter::{ExcludedTags, Filter};
use crate::inflector::Inflector;
use crate::model::WordProfile;
use crate::punctuation::check_punctuation;
use crate::segmenter::{build_profiles, tokenize};
use crate::tagger::Tagger;
use crate::translator::{DEFAULT_EXCLUDED_KEYWORDS, DictTranslator, Translator};

/// Engine: turns a message into its pictogram rewrite.
///
/// Pipeline order:
/// - segmenter (tokenize + profiles) -> punctuation -> tagger -> inflector
///   -> filter (eligibility) -> translator (dictionary match) -> reconstruct
///
/// The engine holds only read-only resources; all per-call state lives in the
/// profile list, so one engine can serve concurrent callers.
pub struct Engine<D, T, I> {
    /// Pictogram dictionary
    dictionary: D,
    /// Part-of-speech tagger
    tagger: T,
    /// Noun singularizer
    inflector: I,
    /// Eligibility filter on grammatical tags
    filter: ExcludedTags,
    /// Entries carrying any of these keywords are never matched
    excluded_keywords: Vec<String>,
}

impl<D, T, I> Engine<D, T, I>
where
    D: Dictionary,
    T: Tagger,
    I: Inflector,
{
    pub fn new(dictionary: D, tagger: T, inflector: I) -> Self {
        Self {
            dictionary,
            tagger,
            inflector,
            filter: ExcludedTags::default(),
            excluded_keywords: DEFAULT_EXCLUDED_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Replace the eligibility filter.
    pub fn excluded_tags(mut self, filter: ExcludedTags) -> Self {
        self.filter = filter;
        self
    }

    /// Replace the script keywords that disqualify dictionary entries.
    pub fn excluded_keywords(
        mut self,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.excluded_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Translate a message: every eligible, matched word becomes its pictogram.
    pub fn translate(&self, message: &str) -> String {
        let profiles = self.analyze(message);
        reconstruct(&profiles)
    }

    /// Run every stage except reconstruction and return the profiles.
    pub fn analyze(&self, message: &str) -> Vec<WordProfile> {
        let tokens = tokenize(message);
        let mut profiles = build_profiles(&tokens);
        check_punctuation(&mut profiles);
        self.tag_parts_of_speech(&mut profiles);
        self.check_plurals(&mut profiles);
        self.match_emojis(&mut profiles);
        debug!(
            tokens = profiles.len(),
            matched = profiles.iter().filter(|p| p.emoji.is_some()).count(),
            "translated message"
        );
        profiles
    }

    /// Tag the raw words and copy tags back by position.
    pub fn tag_parts_of_speech(&self, profiles: &mut [WordProfile]) {
        let words: Vec<&str> = profiles.iter().map(|p| p.word.as_str()).collect();
        let tagged = self.tagger.tag(&words);
        for (profile, tagged) in profiles.iter_mut().zip(tagged) {
            profile.part_of_speech = tagged.tag;
        }
    }

    /// Flag plural words; an inflection failure leaves the word singular.
    pub fn check_plurals(&self, profiles: &mut [WordProfile]) {
        for profile in profiles.iter_mut() {
            let safe_word = profile.safe_word();
            let singular = match self.inflector.singularize(safe_word) {
                Ok(s) => s,
                Err(e) => {
                    debug!(word = %profile.word, error = %e, "treating word as singular");
                    continue;
                }
            };
            if singular != safe_word {
                profile.plural = true;
                profile.singular = Some(singular);
            }
        }
    }

    /// Attach pictograms to eligible profiles.
    pub fn match_emojis(&self, profiles: &mut [WordProfile]) {
        let translator = DictTranslator {
            dict: &self.dictionary,
            excluded_keywords: &self.excluded_keywords,
        };
        for profile in profiles.iter_mut() {
            if !self.filter.should_match(profile) {
                continue;
            }
            if let Some(emoji) = translator.translate(profile) {
                profile.emoji = Some(emoji);
            }
        }
    }
}

/// Rebuild the message: pictogram plus a space, or the safe word; then the punctuation run.
pub fn reconstruct(profiles: &[WordProfile]) -> String {
    let parts: Vec<String> = profiles
        .iter()
        .map(|p| {
            let mut s = match &p.emoji {
                Some(emoji) => format!("{emoji} "),
                None => p.safe_word().to_string(),
            };
            s.push_str(p.punctuation_run());
            s
        })
        .collect();
    parts.join(" ")
}
