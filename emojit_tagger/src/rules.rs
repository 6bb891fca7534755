//! Brill transformation rules.
//!
//! Text format, one rule per line:
//!
//! - `FROM TO PREDICATE [ARG1 [ARG2]]`
//! - `FROM` may be `*` (any tag)
//! - blank lines and lines starting with `//` are ignored
//!
//! Example: `NN VB PREV-WORD-IS would` retags a noun as a base verb after "would".

use std::{fs, path::Path};

use emojit_core::model::TaggedWord;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::info;

use crate::error::TaggerError;

const BUNDLED_RULES: &str = include_str!("../asset/rules.txt");

lazy_static! {
    static ref URL_PATTERN: Regex = Regex::new(r"^(?i)(https?://|www\.)\S+$").unwrap();
    // leading numeric prefix, as a lenient float parser reads it ("3rd" counts, "nan" does not)
    static ref NUMBER_PREFIX: Regex =
        Regex::new(r"^\s*[+-]?(Infinity|(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?)").unwrap();
}

/// Context test attached to a rule. Word comparisons ignore case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    PrevTag(String),
    NextTag(String),
    Prev2Tag(String),
    Next2Tag(String),
    Prev1Or2Tag(String),
    Prev1Or2Or3Tag(String),
    /// Previous tag is the first argument and next tag the second.
    SurroundTag(String, String),
    PrevWordIs(String),
    NextWordIs(String),
    CurrentWordIs(String),
    CurrentWordHasSuffix(String),
    CurrentWordIsNumber(bool),
    CurrentWordIsCap(bool),
    PrevWordIsCap(bool),
    CurrentWordIsUrl(bool),
}

impl Predicate {
    fn parse(name: &str, args: &[&str]) -> Result<Self, String> {
        let arg = |i: usize| -> Result<String, String> {
            args.get(i)
                .map(|s| s.to_string())
                .ok_or_else(|| format!("{name} expects {} argument(s)", i + 1))
        };
        let flag = || -> Result<bool, String> {
            match args.first().copied() {
                Some("YES") => Ok(true),
                Some("NO") => Ok(false),
                Some(other) => Err(format!("{name} expects YES or NO, got '{other}'")),
                None => Err(format!("{name} expects YES or NO")),
            }
        };
        Ok(match name {
            "PREV-TAG" => Self::PrevTag(arg(0)?),
            "NEXT-TAG" => Self::NextTag(arg(0)?),
            "PREV-2-TAG" => Self::Prev2Tag(arg(0)?),
            "NEXT-2-TAG" => Self::Next2Tag(arg(0)?),
            "PREV-1-OR-2-TAG" => Self::Prev1Or2Tag(arg(0)?),
            "PREV-1-OR-2-OR-3-TAG" => Self::Prev1Or2Or3Tag(arg(0)?),
            "SURROUNDTAG" => Self::SurroundTag(arg(0)?, arg(1)?),
            "PREV-WORD-IS" => Self::PrevWordIs(arg(0)?.to_lowercase()),
            "NEXT-WORD-IS" => Self::NextWordIs(arg(0)?.to_lowercase()),
            "CURRENT-WORD-IS" => Self::CurrentWordIs(arg(0)?.to_lowercase()),
            "CURRENT-WORD-HAS-SUFFIX" | "CURRENT-WORD-ENDS-WITH" => {
                Self::CurrentWordHasSuffix(arg(0)?.to_lowercase())
            }
            "CURRENT-WORD-IS-NUMBER" => Self::CurrentWordIsNumber(flag()?),
            "CURRENT-WORD-IS-CAP" => Self::CurrentWordIsCap(flag()?),
            "PREV-WORD-IS-CAP" => Self::PrevWordIsCap(flag()?),
            "CURRENT-WORD-IS-URL" => Self::CurrentWordIsUrl(flag()?),
            other => return Err(format!("unknown predicate '{other}'")),
        })
    }

    /// Whether the predicate holds for position `i` of `sentence`.
    pub fn holds(&self, sentence: &[TaggedWord], i: usize) -> bool {
        let tag_at = |offset: isize| neighbour(sentence, i, offset).map(|t| t.tag.as_str());
        let word_at = |offset: isize| neighbour(sentence, i, offset).map(|t| t.word.as_str());
        let current = sentence[i].word.as_str();

        match self {
            Self::PrevTag(t) => tag_at(-1) == Some(t.as_str()),
            Self::NextTag(t) => tag_at(1) == Some(t.as_str()),
            Self::Prev2Tag(t) => tag_at(-2) == Some(t.as_str()),
            Self::Next2Tag(t) => tag_at(2) == Some(t.as_str()),
            Self::Prev1Or2Tag(t) => [-1, -2].iter().any(|&o| tag_at(o) == Some(t.as_str())),
            Self::Prev1Or2Or3Tag(t) => [-1, -2, -3].iter().any(|&o| tag_at(o) == Some(t.as_str())),
            Self::SurroundTag(prev, next) => {
                tag_at(-1) == Some(prev.as_str()) && tag_at(1) == Some(next.as_str())
            }
            Self::PrevWordIs(w) => word_at(-1).is_some_and(|x| x.to_lowercase() == *w),
            Self::NextWordIs(w) => word_at(1).is_some_and(|x| x.to_lowercase() == *w),
            Self::CurrentWordIs(w) => current.to_lowercase() == *w,
            Self::CurrentWordHasSuffix(s) => current.to_lowercase().ends_with(s.as_str()),
            Self::CurrentWordIsNumber(yes) => NUMBER_PREFIX.is_match(current) == *yes,
            Self::CurrentWordIsCap(yes) => starts_upper(current) == *yes,
            Self::PrevWordIsCap(yes) => word_at(-1).is_some_and(|w| starts_upper(w) == *yes),
            Self::CurrentWordIsUrl(yes) => URL_PATTERN.is_match(current) == *yes,
        }
    }
}

fn neighbour(sentence: &[TaggedWord], i: usize, offset: isize) -> Option<&TaggedWord> {
    sentence.get(i.checked_add_signed(offset)?)
}

fn starts_upper(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// `FROM -> TO` when the predicate holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub from: String,
    pub to: String,
    pub predicate: Predicate,
}

impl Rule {
    /// Rewrite the tag at `i` if the rule fires; returns whether it did.
    pub fn apply(&self, sentence: &mut [TaggedWord], i: usize) -> bool {
        if self.from != "*" && sentence[i].tag != self.from {
            return false;
        }
        if !self.predicate.holds(sentence, i) {
            return false;
        }
        sentence[i].tag = self.to.clone();
        true
    }
}

/// Ordered list of rules.
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TaggerError> {
        let path = path.as_ref();
        let s = fs::read_to_string(path).map_err(|source| TaggerError::Io {
            what: "rule set",
            path: path.to_path_buf(),
            source,
        })?;
        let rules = Self::from_text(&s)?;
        info!(path = %path.display(), rules = rules.len(), "loaded rule set");
        Ok(rules)
    }

    pub fn from_text(s: &str) -> Result<Self, TaggerError> {
        let mut rules = Vec::new();
        for (idx, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with("//") {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [from, to, name, args @ ..] = fields.as_slice() else {
                return Err(TaggerError::Rule {
                    line: idx + 1,
                    reason: "expected FROM TO PREDICATE".to_string(),
                });
            };
            let predicate = Predicate::parse(name, args).map_err(|reason| TaggerError::Rule {
                line: idx + 1,
                reason,
            })?;
            rules.push(Rule {
                from: from.to_string(),
                to: to.to_string(),
                predicate,
            });
        }
        Ok(Self { rules })
    }

    /// The rule set shipped with the crate.
    pub fn bundled() -> Result<Self, TaggerError> {
        Self::from_text(BUNDLED_RULES)
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
