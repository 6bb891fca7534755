//! English noun singularization.
//!
//! Order of checks:
//! - invariant words (uncountables and common function words ending in `s`)
//! - irregular plurals
//! - suffix rules, first match wins
//!
//! The case of the input is restored on the result (`CATS` -> `CAT`, `Cats` -> `Cat`).

use std::collections::{HashMap, HashSet};

use emojit_core::{error::InflectError, inflector::Inflector};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref INVARIANT: HashSet<&'static str> = [
        "always", "as", "bass", "chaos", "deer", "does", "equipment", "fish", "gas", "has", "his",
        "information", "is", "its", "jeans", "means", "mathematics", "money", "moose", "news",
        "perhaps", "physics", "police", "rice", "series", "sheep", "species", "this", "us", "was",
        "yes",
    ]
    .into_iter()
    .collect();

    static ref IRREGULAR: HashMap<&'static str, &'static str> = [
        ("children", "child"),
        ("people", "person"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("oxen", "ox"),
        ("dice", "die"),
        ("lives", "life"),
        ("wives", "wife"),
        ("knives", "knife"),
    ]
    .into_iter()
    .collect();

    static ref SINGULAR_RULES: Vec<(Regex, &'static str)> = [
        (r"(quiz)zes$", "${1}"),
        (r"(matr|append)ices$", "${1}ix"),
        (r"(vert|ind|cort)ices$", "${1}ex"),
        (r"(antenn|formul|nebul|vertebr|vit)ae$", "${1}a"),
        (r"(octop|vir|radi|nucle|fung|cact|stimul)i$", "${1}us"),
        (r"(buffal|tomat|potat|tornad|her|ech|volcan)oes$", "${1}o"),
        (r"(analy|ba|diagno|parenthe|progno|synop|the|cri)ses$", "${1}sis"),
        (r"(hoo|lea|loa|thie|wol|hal|cal|el|shel|sel)ves$", "${1}f"),
        (r"^(movie|cookie|zombie|pixie|hippie|rookie|selfie|smoothie|brownie|tie|pie)s$", "${1}"),
        (r"([^v])ies$", "${1}y"),
        (r"^(m|l)ice$", "${1}ouse"),
        (r"(fire|police|sales|snow|super|chair|business)men$", "${1}man"),
        (r"(bus|lens|iris|atlas)es$", "${1}"),
        (r"(x|ch|ss|sh|zz)es$", "${1}"),
        (r"(ss|us|is)$", "${1}"),
        (r"([^s])s$", "${1}"),
    ]
    .into_iter()
    .map(|(re, rep)| (Regex::new(re).unwrap(), rep))
    .collect();
}

/// Rule-based English noun inflector.
#[derive(Debug, Clone, Copy, Default)]
pub struct NounInflector;

impl NounInflector {
    pub fn new() -> Self {
        Self
    }
}

impl Inflector for NounInflector {
    fn singularize(&self, word: &str) -> Result<String, InflectError> {
        if word.is_empty() {
            return Err(InflectError::EmptyWord);
        }
        if !word.chars().any(char::is_alphabetic) {
            return Err(InflectError::NotAWord {
                word: word.to_string(),
            });
        }

        let lower = word.to_lowercase();
        if INVARIANT.contains(lower.as_str()) {
            return Ok(word.to_string());
        }
        if let Some(singular) = IRREGULAR.get(lower.as_str()) {
            return Ok(restore_case(word, singular));
        }
        for (re, replacement) in SINGULAR_RULES.iter() {
            if re.is_match(&lower) {
                let singular = re.replace(&lower, *replacement);
                if singular == lower {
                    return Ok(word.to_string());
                }
                return Ok(restore_case(word, &singular));
            }
        }
        Ok(word.to_string())
    }
}

/// Apply the casing pattern of `original` to a lowercase `result`.
fn restore_case(original: &str, result: &str) -> String {
    let has_lower = original.chars().any(char::is_lowercase);
    if !has_lower {
        return result.to_uppercase();
    }
    if original.chars().next().is_some_and(char::is_uppercase) {
        let mut chars = result.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        };
    }
    result.to_string()
}
