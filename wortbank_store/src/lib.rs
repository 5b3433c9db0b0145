#![warn(
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

//! sea-orm backed storage for imported words and languages.
//!
//! This crate provides:
//! - `WordRepo`: transactional bulk insert and headword search
//! - `LanguageRepo`: listing, lookup, creation and removal of languages

mod convert;
mod store;

pub use convert::DEFINITION_SEPARATOR;
pub use store::WordStore;
