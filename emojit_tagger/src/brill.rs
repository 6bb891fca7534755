//! Brill part-of-speech tagger: lexicon lookup, then transformation rules.

use emojit_core::{model::TaggedWord, tagger::Tagger};

use crate::{error::TaggerError, lexicon::Lexicon, rules::RuleSet};

pub struct BrillTagger {
    lexicon: Lexicon,
    rules: RuleSet,
}

impl BrillTagger {
    pub fn new(lexicon: Lexicon, rules: RuleSet) -> Self {
        Self { lexicon, rules }
    }

    /// Tagger built from the bundled lexicon and rule set.
    pub fn bundled() -> Result<Self, TaggerError> {
        Ok(Self::new(Lexicon::bundled()?, RuleSet::bundled()?))
    }
}

impl Tagger for BrillTagger {
    fn tag(&self, words: &[&str]) -> Vec<TaggedWord> {
        let mut sentence: Vec<TaggedWord> = words
            .iter()
            .map(|w| TaggedWord::new(*w, self.lexicon.tag_word(w)))
            .collect();

        // every rule at every position; later positions see earlier rewrites
        for i in 0..sentence.len() {
            for rule in self.rules.rules() {
                rule.apply(&mut sentence, i);
            }
        }
        sentence
    }
}
