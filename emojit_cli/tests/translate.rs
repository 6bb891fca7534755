use std::{io::Write, sync::Arc, thread};

use emojit_cli::{
    ResourceLoadError, TranslateRequest, TranslateResponse, TranslatorConfig, initialize, respond,
};
use emojit_core::filter::CLASSIC_EXCLUDED_TAGS;
use emojit_tagger::TaggerError;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

fn file_with(contents: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(contents.as_bytes()).unwrap();
    f
}

fn with_dictionary(json: &str) -> (NamedTempFile, TranslatorConfig) {
    let f = file_with(json);
    let config = TranslatorConfig {
        dictionary: Some(f.path().to_path_buf()),
        ..TranslatorConfig::default()
    };
    (f, config)
}

#[test]
fn canonical_key_match_is_single() {
    let (_f, config) = with_dictionary(
        r#"{"cat": {"keywords": ["cats", "feline"], "char": "🐱", "category": "animals"}}"#,
    );
    let t = initialize(&config).unwrap();
    assert_eq!(t.translate("I love cats!"), "I love 🐱 !");
}

#[test]
fn plural_keyword_match_is_doubled() {
    let (_f, config) = with_dictionary(
        r#"{"puppy": {"keywords": ["dog"], "char": "🐶", "category": "animals"}}"#,
    );
    let t = initialize(&config).unwrap();
    assert_eq!(t.translate("I have dogs"), "I have 🐶 🐶 ");
    assert_eq!(t.translate("I have a dog"), "I have a 🐶 ");
}

#[test]
fn corrupted_dictionary_falls_back_to_bundled() {
    let (_f, config) = with_dictionary(r#"{"cat": {"keywords": ["#);
    let t = initialize(&config).unwrap();
    assert_eq!(t.translate("pizza"), "🍕 ");
}

#[test]
fn missing_dictionary_falls_back_to_bundled() {
    let config = TranslatorConfig {
        dictionary: Some("/no/such/dictionary.json".into()),
        ..TranslatorConfig::default()
    };
    assert_eq!(initialize(&config).unwrap().translate("pizza"), "🍕 ");
}

#[test]
fn unreadable_lexicon_fails_initialization() {
    let config = TranslatorConfig {
        lexicon: Some("/no/such/lexicon.json".into()),
        ..TranslatorConfig::default()
    };
    let err = initialize(&config).err().unwrap();
    assert!(matches!(
        err,
        ResourceLoadError::Tagger(TaggerError::Io { what: "lexicon", .. })
    ));
}

#[test]
fn malformed_rules_fail_initialization() {
    let rules = file_with("NN VB PREV-TAG TO\nthis is not a rule\n");
    let config = TranslatorConfig {
        rules: Some(rules.path().to_path_buf()),
        ..TranslatorConfig::default()
    };
    let err = initialize(&config).err().unwrap();
    assert!(matches!(
        err,
        ResourceLoadError::Tagger(TaggerError::Rule { line: 2, .. })
    ));
}

#[test]
fn custom_lexicon_changes_eligibility() {
    let lexicon = file_with(r#"{"pizza": ["VB"]}"#);
    let config = TranslatorConfig {
        lexicon: Some(lexicon.path().to_path_buf()),
        ..TranslatorConfig::default()
    };
    assert_eq!(initialize(&config).unwrap().translate("pizza"), "pizza");
}

#[test]
fn excluded_tags_are_kept_verbatim() {
    let t = initialize(&TranslatorConfig::default()).unwrap();
    assert_eq!(t.translate("I want to eat the pizza"), "I want to eat the 🍕 ");
}

#[test]
fn classic_exclusions_still_keep_verbs() {
    let config = TranslatorConfig {
        excluded_tags: CLASSIC_EXCLUDED_TAGS.iter().map(|s| s.to_string()).collect(),
        ..TranslatorConfig::default()
    };
    let t = initialize(&config).unwrap();
    assert_eq!(t.translate("to eat pizza"), "to eat 🍕 ");
}

#[test]
fn dictionary_order_decides_between_candidates() {
    // "love" is a keyword of both heart_eyes and heart; heart_eyes comes first
    let t = initialize(&TranslatorConfig::default()).unwrap();
    assert_eq!(t.translate("I love my dog!"), "I 😍  my 🐶 !");
}

#[test]
fn kanji_entries_are_skipped_unless_configured() {
    let t = initialize(&TranslatorConfig::default()).unwrap();
    assert_eq!(t.translate("nothing"), "nothing");

    let config = TranslatorConfig {
        excluded_keywords: Vec::new(),
        ..TranslatorConfig::default()
    };
    assert_eq!(initialize(&config).unwrap().translate("nothing"), "🈚 ");
}

#[test]
fn punctuation_stays_attached() {
    let t = initialize(&TranslatorConfig::default()).unwrap();
    assert_eq!(t.translate("wow, dogs!!"), "wow, 🐶 !!");
}

#[test]
fn third_person_verbs_are_kept() {
    let t = initialize(&TranslatorConfig::default()).unwrap();
    for message in ["He cooks", "She reads", "He kisses her", "He prays", "She dances"] {
        assert_eq!(t.translate(message), message);
    }
    assert_eq!(t.translate("He cooks pizza"), "He cooks 🍕 ");
}

#[test]
fn bundled_dictionary_covers_common_nouns() {
    let t = initialize(&TranslatorConfig::default()).unwrap();
    assert_eq!(t.translate("We watched movies"), "We watched 🎥 🎥 ");
}

#[test]
fn entry_without_pictogram_ends_the_match() {
    let (_f, config) = with_dictionary(
        r#"{
            "ghost": {"keywords": ["boo"], "char": null, "category": "_custom"},
            "ghost2": {"keywords": ["boo"], "char": "👻", "category": "people"}
        }"#,
    );
    let t = initialize(&config).unwrap();
    assert_eq!(t.translate("boo"), "boo");
}

#[test]
fn empty_message_round_trips() {
    let t = initialize(&TranslatorConfig::default()).unwrap();
    assert_eq!(t.translate(""), "");
}

#[test]
fn output_has_at_least_as_many_tokens() {
    let t = initialize(&TranslatorConfig::default()).unwrap();
    for message in [
        "I love cats!",
        "my friends have dogs and cats",
        "the  sun, the moon... and stars?",
        "Children eat cookies",
        "",
    ] {
        let out = t.translate(message);
        assert!(
            out.split(' ').count() >= message.split(' ').count(),
            "{message:?} -> {out:?}"
        );
    }
}

#[test]
fn respond_wraps_translation() {
    let t = initialize(&TranslatorConfig::default()).unwrap();
    let request: TranslateRequest = serde_json::from_str(r#"{"message": "pizza"}"#).unwrap();
    let response = respond(&t, &request);
    assert_eq!(response, TranslateResponse::ok("🍕 ".to_string()));
    assert_eq!(
        serde_json::to_string(&response).unwrap(),
        r#"{"response":"ok","translation":"🍕 "}"#
    );
}

#[test]
fn handle_is_shared_across_threads() {
    let t = Arc::new(initialize(&TranslatorConfig::default()).unwrap());
    let expected = t.translate("I want pizza and beer!");
    thread::scope(|s| {
        for _ in 0..4 {
            let t = Arc::clone(&t);
            let expected = expected.clone();
            s.spawn(move || assert_eq!(t.translate("I want pizza and beer!"), expected));
        }
    });
}
