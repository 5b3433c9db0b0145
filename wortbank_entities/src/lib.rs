//! Database entities for the vocabulary schema.

pub mod language;
pub mod noun_details;
pub mod word;

pub mod prelude {
    pub use super::language::Entity as Language;
    pub use super::noun_details::Entity as NounDetails;
    pub use super::word::Entity as Word;
}
