use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, TransactionTrait,
};
use tracing::{debug, info};
use wortbank_core::{Language, LanguageRepo, NewLanguage, WordRecord, WordRepo, WordSummary};
use wortbank_entities::{language, word};

use crate::convert;

/// Case-insensitive `LIKE`, portable across PostgreSQL and MySQL.
const TEXT_MATCHES: &str = "LOWER(text) LIKE LOWER(?)";

/// Relational storage for languages and words.
pub struct WordStore {
    db: DatabaseConnection,
}

impl WordStore {
    /// Connect to the database at `database_url`.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        info!("Connecting to database for WordStore");
        let db = Database::connect(database_url).await?;
        info!("WordStore initialized");
        Ok(Self { db })
    }

    #[must_use]
    pub const fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl WordRepo for WordStore {
    async fn insert_many(&self, records: &[WordRecord]) -> anyhow::Result<Vec<i32>> {
        let txn = self.db.begin().await?;
        let mut ids = Vec::with_capacity(records.len());

        for record in records {
            let inserted = convert::word_active_model(record).insert(&txn).await?;

            if let Some(details) = convert::noun_details_active_model(record, inserted.id) {
                details.insert(&txn).await?;
            }

            debug!("Inserted word {} ({})", inserted.id, inserted.text);
            ids.push(inserted.id);
        }

        txn.commit().await?;
        info!("Inserted {} words", ids.len());
        Ok(ids)
    }

    async fn search(
        &self,
        text: &str,
        language_id: Option<i32>,
        limit: u64,
    ) -> anyhow::Result<Vec<WordSummary>> {
        let models = search_query(text, language_id, limit).all(&self.db).await?;

        debug!("Search '{}' matched {} words", text, models.len());
        Ok(models
            .into_iter()
            .map(convert::word_summary_from_model)
            .collect())
    }
}

/// Headwords matching `pattern`, oldest first.
fn search_query(pattern: &str, language_id: Option<i32>, limit: u64) -> Select<word::Entity> {
    let mut query =
        word::Entity::find().filter(Expr::cust_with_values(TEXT_MATCHES, [pattern.to_string()]));

    if let Some(id) = language_id {
        query = query.filter(word::Column::LanguageId.eq(id));
    }

    query.order_by_asc(word::Column::Id).limit(limit)
}

#[async_trait]
impl LanguageRepo for WordStore {
    async fn all(&self, limit: u64) -> anyhow::Result<Vec<Language>> {
        let models = language::Entity::find()
            .order_by_desc(language::Column::Id)
            .limit(limit)
            .all(&self.db)
            .await?;

        Ok(models
            .into_iter()
            .map(convert::language_from_model)
            .collect())
    }

    async fn by_id(&self, id: i32) -> anyhow::Result<Option<Language>> {
        let model = language::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(convert::language_from_model))
    }

    async fn create(&self, new: &NewLanguage) -> anyhow::Result<Language> {
        new.validate()?;

        let model = convert::language_active_model(new).insert(&self.db).await?;
        info!("Created language {} ({})", model.name, model.code);
        Ok(convert::language_from_model(model))
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let result = language::Entity::delete_by_id(id).exec(&self.db).await?;

        info!("Deleted language {}: {} rows", id, result.rows_affected);
        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, QueryTrait};

    fn postgres_sql(pattern: &str, language_id: Option<i32>, limit: u64) -> String {
        search_query(pattern, language_id, limit)
            .build(DbBackend::Postgres)
            .to_string()
    }

    #[test]
    fn search_matches_case_insensitively() {
        let sql = postgres_sql("hund%", None, 10);
        assert!(sql.contains("LOWER(text) LIKE LOWER('hund%')"), "{sql}");
        assert!(!sql.contains("language_id\" ="), "{sql}");
    }

    #[test]
    fn search_orders_by_id_and_limits() {
        let sql = postgres_sql("hund", None, 5);
        assert!(sql.ends_with(r#"ORDER BY "word"."id" ASC LIMIT 5"#), "{sql}");
    }

    #[test]
    fn search_filters_by_language_when_given() {
        let sql = postgres_sql("hund", Some(2), 10);
        assert!(sql.contains("LOWER(text) LIKE LOWER('hund')"), "{sql}");
        assert!(sql.contains(r#""word"."language_id" = 2"#), "{sql}");
    }

    #[test]
    fn mysql_uses_the_same_predicate() {
        let sql = search_query("Hund", Some(3), 1)
            .build(DbBackend::MySql)
            .to_string();
        assert!(sql.contains("LOWER(text) LIKE LOWER('Hund')"), "{sql}");
        assert!(sql.contains("`word`.`language_id` = 3"), "{sql}");
        assert!(sql.ends_with("LIMIT 1"), "{sql}");
    }
}
