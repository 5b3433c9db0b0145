//! Integration tests for the import pipeline.
//!
//! These tests verify that:
//! - Parsed records reach the repository in entry order
//! - Warnings survive the trip through the importer
//! - Empty input never touches the repository
//! - Repository failures propagate to the caller

use std::sync::Mutex;

use async_trait::async_trait;
use wortbank_core::{
    EntryParser, FieldWarning, Frequency, Gender, Importer, WordRecord, WordRepo, WordSummary,
};

#[derive(Default)]
struct InMemoryWords {
    rows: Mutex<Vec<WordRecord>>,
    calls: Mutex<usize>,
}

#[async_trait]
impl WordRepo for InMemoryWords {
    async fn insert_many(&self, records: &[WordRecord]) -> anyhow::Result<Vec<i32>> {
        *self.calls.lock().map_err(|e| anyhow::anyhow!("{e}"))? += 1;
        let mut rows = self.rows.lock().map_err(|e| anyhow::anyhow!("{e}"))?;
        let mut ids = Vec::with_capacity(records.len());
        for record in records {
            rows.push(record.clone());
            ids.push(i32::try_from(rows.len())?);
        }
        Ok(ids)
    }

    async fn search(
        &self,
        text: &str,
        language_id: Option<i32>,
        limit: u64,
    ) -> anyhow::Result<Vec<WordSummary>> {
        let rows = self.rows.lock().map_err(|e| anyhow::anyhow!("{e}"))?;
        let needle = text.to_lowercase();
        Ok(rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.text.to_lowercase() == needle)
            .filter(|(_, r)| language_id.is_none_or(|id| r.language_id == id))
            .take(usize::try_from(limit)?)
            .map(|(i, r)| WordSummary {
                id: i32::try_from(i + 1).unwrap_or(i32::MAX),
                text: r.text.clone(),
                language_id: r.language_id,
            })
            .collect())
    }
}

struct FailingWords;

#[async_trait]
impl WordRepo for FailingWords {
    async fn insert_many(&self, _records: &[WordRecord]) -> anyhow::Result<Vec<i32>> {
        anyhow::bail!("connection refused")
    }

    async fn search(
        &self,
        _text: &str,
        _language_id: Option<i32>,
        _limit: u64,
    ) -> anyhow::Result<Vec<WordSummary>> {
        Ok(Vec::new())
    }
}

const DECK: &str = "\
[Noun]
Hund
[Article]
der
[Meaning 1]
dog
[Synonyms]
Köter, Hund
[Frequency]
88

[Noun]
Straße
[Article]
die
[Meaning 1]
stra&szlig;e, road
[Frequency]
n/a
[Audio]
[sound:strasse.mp3]


";

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn test_import_inserts_records_in_order() {
    let importer = Importer::new(EntryParser::new(2), InMemoryWords::default());

    let outcome = importer.import(DECK).await.expect("import should succeed");
    assert_eq!(outcome.word_ids, vec![1, 2]);

    let hits = importer_search(&importer, "hund").await;
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].text, "Hund");
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn test_import_keeps_field_warnings() {
    let importer = Importer::new(EntryParser::new(2), InMemoryWords::default());

    let outcome = importer.import(DECK).await.expect("import should succeed");
    assert_eq!(
        outcome.warnings,
        vec![FieldWarning::InvalidFrequency {
            block: 1,
            payload: "n/a".to_string()
        }]
    );
}

#[tokio::test]
async fn test_parsed_records_carry_derived_fields() {
    let records = EntryParser::new(2).parse(DECK);
    assert_eq!(records.len(), 2);

    let strasse = &records[1];
    assert_eq!(strasse.gender(), Gender::Feminine);
    assert_eq!(strasse.definitions, vec!["straße, road"]);
    assert_eq!(strasse.frequency, Frequency::NotANumber);
    assert_eq!(strasse.audio_ref, "strasse.mp3");
}

#[tokio::test]
#[expect(clippy::expect_used, reason = "Test failure should panic with context")]
async fn test_empty_input_skips_repository() {
    let repo = InMemoryWords::default();
    let importer = Importer::new(EntryParser::default(), repo);

    let outcome = importer
        .import("\n\n   \n\n")
        .await
        .expect("empty import should succeed");
    assert!(outcome.word_ids.is_empty());
    assert!(outcome.warnings.is_empty());

    let calls = *importer.repo().calls.lock().expect("lock should not be poisoned");
    assert_eq!(calls, 0);
}

#[tokio::test]
async fn test_repository_error_propagates() {
    let importer = Importer::new(EntryParser::default(), FailingWords);

    let result = importer.import("[Noun]\nHund").await;
    assert!(result.is_err());
    if let Err(e) = result {
        assert!(e.to_string().contains("connection refused"));
    }
}

async fn importer_search(importer: &Importer<InMemoryWords>, text: &str) -> Vec<WordSummary> {
    importer
        .repo()
        .search(text, Some(importer.parser().language_id()), 10)
        .await
        .unwrap_or_default()
}
