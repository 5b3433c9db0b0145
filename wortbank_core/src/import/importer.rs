use tracing::{info, warn};

use super::parser::EntryParser;
use super::report::FieldWarning;
use crate::repository::WordRepo;

/// Result of one import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    /// Ids of the inserted words, in entry order.
    pub word_ids: Vec<i32>,
    pub warnings: Vec<FieldWarning>,
}

/// Parses pasted text and hands the records to a [`WordRepo`].
pub struct Importer<R> {
    parser: EntryParser,
    repo: R,
}

impl<R: WordRepo> Importer<R> {
    pub const fn new(parser: EntryParser, repo: R) -> Self {
        Self { parser, repo }
    }

    #[must_use]
    pub const fn parser(&self) -> &EntryParser {
        &self.parser
    }

    #[must_use]
    pub const fn repo(&self) -> &R {
        &self.repo
    }

    pub async fn import(&self, raw: &str) -> anyhow::Result<ImportOutcome> {
        let report = self.parser.parse_with_report(raw);

        for warning in &report.warnings {
            warn!("{warning}");
        }

        if report.records.is_empty() {
            info!("Nothing to import");
            return Ok(ImportOutcome {
                word_ids: Vec::new(),
                warnings: report.warnings,
            });
        }

        let word_ids = self.repo.insert_many(&report.records).await?;
        info!(
            "Imported {} words into language {}",
            word_ids.len(),
            self.parser.language_id()
        );

        Ok(ImportOutcome {
            word_ids,
            warnings: report.warnings,
        })
    }
}
