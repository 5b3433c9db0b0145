use async_trait::async_trait;

use crate::language::{Language, NewLanguage};
use crate::word::{WordRecord, WordSummary};

/// Row limit used by search and listing when the caller has no preference.
pub const DEFAULT_LIMIT: u64 = 10;

#[async_trait]
pub trait WordRepo: Send + Sync {
    /// Persist records in one transaction, returning the new word ids in
    /// input order.
    async fn insert_many(&self, records: &[WordRecord]) -> anyhow::Result<Vec<i32>>;

    /// Case-insensitive pattern match on the headword.
    async fn search(
        &self,
        text: &str,
        language_id: Option<i32>,
        limit: u64,
    ) -> anyhow::Result<Vec<WordSummary>>;
}

#[async_trait]
pub trait LanguageRepo: Send + Sync {
    /// Most recently added languages first.
    async fn all(&self, limit: u64) -> anyhow::Result<Vec<Language>>;

    async fn by_id(&self, id: i32) -> anyhow::Result<Option<Language>>;

    async fn create(&self, language: &NewLanguage) -> anyhow::Result<Language>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
}
