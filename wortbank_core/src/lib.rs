#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod import;
pub mod language;
pub mod repository;
pub mod word;

pub use import::{
    DEFAULT_LANGUAGE_ID, EntryParser, FieldWarning, ImportOutcome, ImportReport, Importer, Tag,
    parse,
};
pub use language::{Language, NewLanguage, ValidationError};
pub use repository::{DEFAULT_LIMIT, LanguageRepo, WordRepo};
pub use word::{Frequency, Gender, WordClass, WordRecord, WordSummary};
