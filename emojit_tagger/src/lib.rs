//! English analysis for the translator: a Brill part-of-speech tagger and a
//! noun inflector.
//!
//! Both ship with bundled resources (`asset/lexicon.json`, `asset/rules.txt`)
//! and can be loaded from files instead.

pub mod brill;
pub mod error;
pub mod inflector;
pub mod lexicon;
pub mod rules;

pub use brill::BrillTagger;
pub use error::TaggerError;
pub use inflector::NounInflector;
pub use lexicon::{DEFAULT_CATEGORY, Lexicon};
pub use rules::RuleSet;
