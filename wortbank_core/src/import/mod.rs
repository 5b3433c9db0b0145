//! Bulk import of annotated word entries.
//!
//! The input is plain text made of blocks separated by a blank line. Inside
//! a block, tag lines such as `[Noun]` or `[Meaning 1]` announce what the
//! next line holds:
//!
//! ```text
//! [Noun]
//! Hund
//! [Article]
//! der
//! [Meaning 1]
//! dog
//! ```
//!
//! Parsing never fails. A tag with a missing or malformed payload leaves its
//! field at the default; [`EntryParser::parse_with_report`] lists those
//! fields for callers that want to show them.

mod decode;
mod importer;
mod parser;
mod report;
mod tag;

use regex::Regex;

pub use decode::decode_entities;
pub use importer::{ImportOutcome, Importer};
pub use parser::{DEFAULT_LANGUAGE_ID, EntryParser, parse};
pub use report::{FieldWarning, ImportReport};
pub use tag::Tag;

#[expect(
    clippy::expect_used,
    reason = "Static regex pattern validated at compile time"
)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Static regex pattern is guaranteed to be valid")
}
