use chrono::Utc;
use sea_orm::{NotSet, Set};
use wortbank_core::{Language, NewLanguage, WordClass, WordRecord, WordSummary};
use wortbank_entities::word::CoreWordType;
use wortbank_entities::{language, noun_details, word};

/// Separator used to fold several meanings into the single `definition`
/// column.
pub const DEFINITION_SEPARATOR: &str = "; ";

pub const fn core_word_type(class: WordClass) -> CoreWordType {
    match class {
        WordClass::Null => CoreWordType::Null,
        WordClass::Noun => CoreWordType::Noun,
        WordClass::Verb => CoreWordType::Verb,
        WordClass::Adjective => CoreWordType::Adjective,
        WordClass::Adverb => CoreWordType::Adverb,
        WordClass::Pronoun => CoreWordType::Pronoun,
        WordClass::Preposition => CoreWordType::Preposition,
        WordClass::Conjunction => CoreWordType::Conjunction,
        WordClass::Interjection => CoreWordType::Interjection,
    }
}

pub fn join_definitions(definitions: &[String]) -> String {
    definitions.join(DEFINITION_SEPARATOR)
}

pub fn word_active_model(record: &WordRecord) -> word::ActiveModel {
    word::ActiveModel {
        id: NotSet,
        text: Set(record.text.clone()),
        pinyin: Set(None),
        definition: Set(join_definitions(&record.definitions)),
        word_type: Set(Some(core_word_type(record.word_class))),
        created_at: Set(Some(Utc::now().naive_utc())),
        language_id: Set(record.language_id),
    }
}

/// Nouns get a `noun_details` row; other word classes get none.
///
/// Only the gender is known at import time; the inflected forms stay empty.
pub fn noun_details_active_model(
    record: &WordRecord,
    word_id: i32,
) -> Option<noun_details::ActiveModel> {
    if record.word_class != WordClass::Noun {
        return None;
    }

    Some(noun_details::ActiveModel {
        id: NotSet,
        gender: Set(record.gender().code().map(str::to_string)),
        definite_form: Set(None),
        plural_form: Set(None),
        word_id: Set(Some(word_id)),
    })
}

pub fn language_active_model(new: &NewLanguage) -> language::ActiveModel {
    language::ActiveModel {
        id: NotSet,
        code: Set(new.code.clone()),
        name: Set(new.name.clone()),
        is_rtl: Set(Some(new.is_rtl)),
    }
}

pub fn language_from_model(m: language::Model) -> Language {
    Language {
        id: m.id,
        code: m.code,
        name: m.name,
        is_rtl: m.is_rtl.unwrap_or(false),
    }
}

pub fn word_summary_from_model(m: word::Model) -> WordSummary {
    WordSummary {
        id: m.id,
        text: m.text,
        language_id: m.language_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wortbank_core::parse;

    fn hund() -> WordRecord {
        parse("[Noun]\nHund\n[Article]\nder\n[Meaning 1]\ndog\n[Meaning 2]\nhound").remove(0)
    }

    #[test]
    fn word_row_folds_definitions() {
        let model = word_active_model(&hund());
        assert_eq!(model.text, Set("Hund".to_string()));
        assert_eq!(model.definition, Set("dog; hound".to_string()));
        assert_eq!(model.word_type, Set(Some(CoreWordType::Noun)));
        assert_eq!(model.language_id, Set(2));
        assert!(!model.id.is_set());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn noun_details_store_gender_code() {
        let model = noun_details_active_model(&hund(), 41).expect("nouns carry details");
        assert_eq!(model.gender, Set(Some("m".to_string())));
        assert_eq!(model.word_id, Set(Some(41)));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn unknown_gender_is_stored_as_null() {
        let record = parse("[Noun]\nHund\n[Article]\nden").remove(0);
        let model = noun_details_active_model(&record, 1).expect("nouns carry details");
        assert_eq!(model.gender, Set(None));
    }

    #[test]
    fn other_word_classes_have_no_noun_details() {
        let mut record = hund();
        record.word_class = WordClass::Verb;
        assert!(noun_details_active_model(&record, 7).is_none());

        record.word_class = WordClass::Null;
        assert!(noun_details_active_model(&record, 7).is_none());
    }

    #[test]
    fn language_defaults_rtl_to_false() {
        let language = language_from_model(language::Model {
            id: 3,
            code: "sv".to_string(),
            name: "Swedish".to_string(),
            is_rtl: None,
        });
        assert!(!language.is_rtl);
        assert_eq!(language.code, "sv");
    }

    #[test]
    fn new_language_row() {
        let model = language_active_model(&NewLanguage::new("ar", "Arabic").rtl(true));
        assert_eq!(model.code, Set("ar".to_string()));
        assert_eq!(model.is_rtl, Set(Some(true)));
    }

    #[test]
    fn word_class_maps_onto_db_enum() {
        assert_eq!(core_word_type(WordClass::Null), CoreWordType::Null);
        assert_eq!(core_word_type(WordClass::Verb), CoreWordType::Verb);
    }
}
