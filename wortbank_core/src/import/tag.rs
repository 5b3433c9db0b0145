//! Tag vocabulary of the bulk-import format.
//!
//! Each tag line says what the line right after it holds. Tags are matched
//! against the trimmed line exactly, except [`Tag::Meaning`] which is a
//! prefix so that `[Meaning 1]`, `[Meaning 2]`, ... all count.

use once_cell::sync::Lazy;
use regex::Regex;

use super::decode::decode_entities;
use super::report::FieldWarning;
use crate::word::{Frequency, WordRecord};

static SYNONYM_SEPARATOR: Lazy<Regex> = Lazy::new(|| super::compile(r"\s*,\s*"));
static SOUND_REF: Lazy<Regex> = Lazy::new(|| super::compile(r"\[sound:(.+?)\]"));
static LEADING_INTEGER: Lazy<Regex> = Lazy::new(|| super::compile(r"^[+-]?[0-9]+"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Noun,
    Article,
    Meaning,
    SampleSentence,
    Synonyms,
    Frequency,
    Source,
    Audio,
}

impl Tag {
    pub const ALL: [Self; 8] = [
        Self::Noun,
        Self::Article,
        Self::Meaning,
        Self::SampleSentence,
        Self::Synonyms,
        Self::Frequency,
        Self::Source,
        Self::Audio,
    ];

    /// Literal as it appears in the import text. For [`Tag::Meaning`] this
    /// is only the prefix.
    #[must_use]
    pub const fn literal(&self) -> &'static str {
        match self {
            Self::Noun => "[Noun]",
            Self::Article => "[Article]",
            Self::Meaning => "[Meaning",
            Self::SampleSentence => "[Sample Sentence]",
            Self::Synonyms => "[Synonyms]",
            Self::Frequency => "[Frequency]",
            Self::Source => "[Source]",
            Self::Audio => "[Audio]",
        }
    }

    #[must_use]
    pub const fn is_prefix(&self) -> bool {
        matches!(self, Self::Meaning)
    }

    /// `line` must already be trimmed.
    #[must_use]
    pub fn matches(&self, line: &str) -> bool {
        if self.is_prefix() {
            line.starts_with(self.literal())
        } else {
            line == self.literal()
        }
    }

    /// The tag a trimmed line stands for, if any.
    #[must_use]
    pub fn recognize(line: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tag| tag.matches(line))
    }

    /// Store the line following the tag into `record`.
    ///
    /// `payload` is `None` when the tag was the last line of its block. The
    /// field then falls back to its default and a warning is returned; the
    /// record is never left half-written.
    pub(crate) fn apply(
        self,
        payload: Option<&str>,
        record: &mut WordRecord,
        block: usize,
    ) -> Option<FieldWarning> {
        let Some(line) = payload.map(str::trim) else {
            self.apply_missing(record);
            return Some(FieldWarning::MissingPayload { block, tag: self });
        };

        match self {
            Self::Noun => record.text = line.to_string(),
            Self::Article => record.article = line.to_string(),
            Self::Meaning => record.definitions.push(decode_entities(line).into_owned()),
            Self::SampleSentence => {
                if !line.is_empty() {
                    record.examples.push(line.to_string());
                }
            }
            Self::Synonyms => {
                record.synonyms = SYNONYM_SEPARATOR
                    .split(line)
                    .map(str::to_string)
                    .collect();
            }
            Self::Frequency => {
                record.frequency = parse_frequency(line);
                if record.frequency.is_nan() {
                    return Some(FieldWarning::InvalidFrequency {
                        block,
                        payload: line.to_string(),
                    });
                }
            }
            Self::Source => record.source = line.to_string(),
            Self::Audio => match SOUND_REF.captures(line) {
                Some(caps) => record.audio_ref = caps[1].to_string(),
                None => {
                    return Some(FieldWarning::MissingSoundRef {
                        block,
                        payload: line.to_string(),
                    });
                }
            },
        }

        None
    }

    fn apply_missing(self, record: &mut WordRecord) {
        match self {
            Self::Noun => record.text.clear(),
            Self::Article => record.article.clear(),
            Self::Meaning => record.definitions.push(String::new()),
            Self::Synonyms => record.synonyms.clear(),
            Self::Frequency => record.frequency = Frequency::NotANumber,
            Self::Source => record.source.clear(),
            Self::SampleSentence | Self::Audio => {}
        }
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Meaning => f.write_str("[Meaning]"),
            _ => f.write_str(self.literal()),
        }
    }
}

/// Leading signed decimal digits, the way `parseInt` reads them.
fn parse_frequency(line: &str) -> Frequency {
    LEADING_INTEGER
        .find(line)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .map_or(Frequency::NotANumber, Frequency::Known)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn applied(tag: Tag, payload: Option<&str>) -> (WordRecord, Option<FieldWarning>) {
        let mut record = WordRecord::noun(2);
        let warning = tag.apply(payload, &mut record, 0);
        (record, warning)
    }

    #[test]
    fn recognizes_exact_tags() {
        assert_eq!(Tag::recognize("[Noun]"), Some(Tag::Noun));
        assert_eq!(Tag::recognize("[Sample Sentence]"), Some(Tag::SampleSentence));
        assert_eq!(Tag::recognize("[Audio]"), Some(Tag::Audio));
        assert_eq!(Tag::recognize("[Noun] Hund"), None);
        assert_eq!(Tag::recognize("[noun]"), None);
        assert_eq!(Tag::recognize("[Verb]"), None);
    }

    #[test]
    fn meaning_matches_by_prefix() {
        assert_eq!(Tag::recognize("[Meaning]"), Some(Tag::Meaning));
        assert_eq!(Tag::recognize("[Meaning 1]"), Some(Tag::Meaning));
        assert_eq!(Tag::recognize("[Meanings"), Some(Tag::Meaning));
        assert_eq!(Tag::recognize("Meaning 1"), None);
    }

    #[test]
    fn synonyms_split_on_comma_with_whitespace() {
        let (record, warning) = applied(Tag::Synonyms, Some("  Köter ,Hund,  Töle  "));
        assert_eq!(record.synonyms, vec!["Köter", "Hund", "Töle"]);
        assert!(warning.is_none());
    }

    #[test]
    fn empty_synonym_line_gives_single_empty_entry() {
        let (record, _) = applied(Tag::Synonyms, Some("   "));
        assert_eq!(record.synonyms, vec![String::new()]);
    }

    #[test]
    fn missing_synonym_line_gives_empty_list() {
        let (record, warning) = applied(Tag::Synonyms, None);
        assert!(record.synonyms.is_empty());
        assert_eq!(
            warning,
            Some(FieldWarning::MissingPayload {
                block: 0,
                tag: Tag::Synonyms
            })
        );
    }

    #[test]
    fn frequency_reads_leading_digits() {
        assert_eq!(parse_frequency("120"), Frequency::Known(120));
        assert_eq!(parse_frequency("-3"), Frequency::Known(-3));
        assert_eq!(parse_frequency("12abc"), Frequency::Known(12));
        assert_eq!(parse_frequency("abc"), Frequency::NotANumber);
        assert_eq!(parse_frequency(""), Frequency::NotANumber);
        assert_eq!(
            parse_frequency("99999999999999999999999"),
            Frequency::NotANumber
        );
    }

    #[test]
    fn non_numeric_frequency_warns() {
        let (record, warning) = applied(Tag::Frequency, Some("abc"));
        assert_eq!(record.frequency, Frequency::NotANumber);
        assert_eq!(
            warning,
            Some(FieldWarning::InvalidFrequency {
                block: 0,
                payload: "abc".to_string()
            })
        );
    }

    #[test]
    fn audio_captures_sound_reference() {
        let (record, warning) = applied(Tag::Audio, Some("[sound:foo.mp3]"));
        assert_eq!(record.audio_ref, "foo.mp3");
        assert!(warning.is_none());

        let (record, _) = applied(Tag::Audio, Some("prefix [sound:a.mp3] [sound:b.mp3]"));
        assert_eq!(record.audio_ref, "a.mp3");
    }

    #[test]
    fn audio_without_wrapper_stays_empty() {
        let (record, warning) = applied(Tag::Audio, Some("foo.mp3"));
        assert_eq!(record.audio_ref, "");
        assert!(matches!(warning, Some(FieldWarning::MissingSoundRef { .. })));
    }

    #[test]
    fn sample_sentence_skips_blank_lines() {
        let (record, _) = applied(Tag::SampleSentence, Some("   "));
        assert!(record.examples.is_empty());

        let (record, _) = applied(Tag::SampleSentence, Some(" Der Hund bellt. "));
        assert_eq!(record.examples, vec!["Der Hund bellt."]);
    }

    #[test]
    fn meaning_is_decoded_and_kept_when_empty() {
        let (record, _) = applied(Tag::Meaning, Some("g&auml;hnen"));
        assert_eq!(record.definitions, vec!["gähnen"]);

        let (record, _) = applied(Tag::Meaning, Some(""));
        assert_eq!(record.definitions, vec![String::new()]);

        let (record, _) = applied(Tag::Meaning, None);
        assert_eq!(record.definitions, vec![String::new()]);
    }

    #[test]
    fn entities_are_not_decoded_outside_meanings() {
        let (record, _) = applied(Tag::Source, Some("M&auml;rchen"));
        assert_eq!(record.source, "M&auml;rchen");
    }
}
