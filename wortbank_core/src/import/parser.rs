use std::borrow::Cow;

use tracing::debug;

use super::report::{FieldWarning, ImportReport};
use super::tag::Tag;
use crate::word::WordRecord;

/// Language id stamped on records when the caller does not pick one.
pub const DEFAULT_LANGUAGE_ID: i32 = 2;

const BLOCK_SEPARATOR: &str = "\n\n";

/// Written by some editors at the start of UTF-8 files.
const BYTE_ORDER_MARK: char = '\u{feff}';

/// Turns a pasted text block into one [`WordRecord`] per entry.
///
/// The parser is stateless apart from the batch language, so one value can
/// be shared between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryParser {
    language_id: i32,
}

impl Default for EntryParser {
    fn default() -> Self {
        Self::new(DEFAULT_LANGUAGE_ID)
    }
}

impl EntryParser {
    #[must_use]
    pub const fn new(language_id: i32) -> Self {
        Self { language_id }
    }

    #[must_use]
    pub const fn language_id(&self) -> i32 {
        self.language_id
    }

    /// Parse `raw`, silently defaulting malformed fields.
    #[must_use]
    pub fn parse(&self, raw: &str) -> Vec<WordRecord> {
        self.parse_with_report(raw).records
    }

    /// Parse `raw` and also report every field that fell back to its
    /// default. The records are the same as those of [`Self::parse`].
    #[must_use]
    pub fn parse_with_report(&self, raw: &str) -> ImportReport {
        let text = normalize_newlines(raw);
        let mut report = ImportReport::default();

        for (index, block) in blocks(&text).enumerate() {
            let record = self.parse_block(block, index, &mut report.warnings);
            report.records.push(record);
        }

        debug!(
            "Parsed {} entries with {} warnings",
            report.records.len(),
            report.warnings.len()
        );
        report
    }

    fn parse_block(
        &self,
        block: &str,
        index: usize,
        warnings: &mut Vec<FieldWarning>,
    ) -> WordRecord {
        let mut record = WordRecord::noun(self.language_id);
        let mut cursor = LineCursor::new(block);

        while let Some(line) = cursor.advance() {
            let Some(tag) = Tag::recognize(line.trim()) else {
                continue;
            };
            let payload = cursor.advance();
            if let Some(warning) = tag.apply(payload, &mut record, index) {
                warnings.push(warning);
            }
        }

        record
    }
}

/// Parse with the default batch language.
#[must_use]
pub fn parse(raw: &str) -> Vec<WordRecord> {
    EntryParser::default().parse(raw)
}

fn normalize_newlines(raw: &str) -> Cow<'_, str> {
    let raw = raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw);
    if raw.contains("\r\n") {
        Cow::Owned(raw.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(raw)
    }
}

/// Non-blank blocks in input order.
fn blocks(text: &str) -> impl Iterator<Item = &str> {
    text.split(BLOCK_SEPARATOR)
        .filter(|block| !block.trim().is_empty())
}

/// Forward-only cursor over the lines of one block.
///
/// A tag consumes the line after it through a second [`Self::advance`], so
/// that line is never looked at as a tag itself.
struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(block: &'a str) -> Self {
        Self {
            lines: block.split('\n').collect(),
            pos: 0,
        }
    }

    fn advance(&mut self) -> Option<&'a str> {
        let line = self.lines.get(self.pos).copied()?;
        self.pos += 1;
        Some(line)
    }
}
