//! Word-level domain types shared by the parser and the store.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

/// Grammatical category of a word, mirroring the `coreWordType` column.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum WordClass {
    #[default]
    Null,
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Interjection,
}

impl WordClass {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Noun => "noun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Pronoun => "pronoun",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Interjection => "interjection",
        }
    }
}

impl std::fmt::Display for WordClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordClass {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "null" => Ok(Self::Null),
            "noun" => Ok(Self::Noun),
            "verb" => Ok(Self::Verb),
            "adjective" => Ok(Self::Adjective),
            "adverb" => Ok(Self::Adverb),
            "pronoun" => Ok(Self::Pronoun),
            "preposition" => Ok(Self::Preposition),
            "conjunction" => Ok(Self::Conjunction),
            "interjection" => Ok(Self::Interjection),
            _ => Err(anyhow::anyhow!("unknown word class: {s}")),
        }
    }
}

/// Grammatical gender of a noun.
///
/// Only ever obtained from an article through [`Gender::from_article`].
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
    Unknown,
}

impl Gender {
    /// Exact-match lookup of a German definite article.
    #[must_use]
    pub fn from_article(article: &str) -> Self {
        match article {
            "der" => Self::Masculine,
            "die" => Self::Feminine,
            "das" => Self::Neuter,
            _ => Self::Unknown,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Masculine => "masculine",
            Self::Feminine => "feminine",
            Self::Neuter => "neuter",
            Self::Unknown => "unknown",
        }
    }

    /// One-letter form stored in `noun_details.gender`.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Masculine => Some("m"),
            Self::Feminine => Some("f"),
            Self::Neuter => Some("n"),
            Self::Unknown => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Corpus frequency rank of a word.
///
/// `NotANumber` marks a frequency tag whose payload could not be read as an
/// integer. It serializes as `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Frequency {
    Known(i64),
    NotANumber,
}

impl Default for Frequency {
    fn default() -> Self {
        Self::Known(0)
    }
}

impl Frequency {
    #[must_use]
    pub const fn value(&self) -> Option<i64> {
        match self {
            Self::Known(n) => Some(*n),
            Self::NotANumber => None,
        }
    }

    #[must_use]
    pub const fn is_nan(&self) -> bool {
        matches!(self, Self::NotANumber)
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known(n) => write!(f, "{n}"),
            Self::NotANumber => f.write_str("NaN"),
        }
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(n) => serializer.serialize_i64(*n),
            Self::NotANumber => serializer.serialize_none(),
        }
    }
}

/// One parsed word entry, ready to be handed to a [`crate::WordRepo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub text: String,
    pub word_class: WordClass,
    pub article: String,
    pub definitions: Vec<String>,
    pub examples: Vec<String>,
    pub synonyms: Vec<String>,
    pub frequency: Frequency,
    pub source: String,
    pub audio_ref: String,
    pub language_id: i32,
}

impl WordRecord {
    /// Empty noun record for the given batch language.
    #[must_use]
    pub fn noun(language_id: i32) -> Self {
        Self {
            text: String::new(),
            word_class: WordClass::Noun,
            article: String::new(),
            definitions: Vec::new(),
            examples: Vec::new(),
            synonyms: Vec::new(),
            frequency: Frequency::default(),
            source: String::new(),
            audio_ref: String::new(),
            language_id,
        }
    }

    /// Gender derived from the current article.
    #[must_use]
    pub fn gender(&self) -> Gender {
        Gender::from_article(&self.article)
    }
}

impl Serialize for WordRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("WordRecord", 11)?;
        s.serialize_field("text", &self.text)?;
        s.serialize_field("word_class", &self.word_class)?;
        s.serialize_field("article", &self.article)?;
        s.serialize_field("gender", &self.gender())?;
        s.serialize_field("definitions", &self.definitions)?;
        s.serialize_field("examples", &self.examples)?;
        s.serialize_field("synonyms", &self.synonyms)?;
        s.serialize_field("frequency", &self.frequency)?;
        s.serialize_field("source", &self.source)?;
        s.serialize_field("audio_ref", &self.audio_ref)?;
        s.serialize_field("language_id", &self.language_id)?;
        s.end()
    }
}

/// Search hit: just enough to show a word and link to it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordSummary {
    pub id: i32,
    pub text: String,
    pub language_id: i32,
}
