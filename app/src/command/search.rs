use wortbank_core::{WordRepo, WordSummary};

use super::{ConfigSource, connect_store};

#[derive(Debug, Clone)]
pub struct SearchInput {
    pub config: ConfigSource,
    pub text: String,
    pub language_id: Option<i32>,
    /// Overrides `search.limit` from the config
    pub limit: Option<u64>,
}

/// Strategy for looking up headwords.
///
/// Matching is case-insensitive; `%` and `_` in the query act as wildcards.
#[derive(Debug, Clone, Copy)]
pub struct SearchStrategy;

impl super::CommandStrategy for SearchStrategy {
    type Input = SearchInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let (config, store) = connect_store(&input.config).await?;
        let limit = input.limit.unwrap_or(config.search.limit);

        let words = store.search(&input.text, input.language_id, limit).await?;
        print!("{}", format_results(&words));
        Ok(())
    }
}

fn format_results(words: &[WordSummary]) -> String {
    if words.is_empty() {
        return "No results found\n".to_string();
    }

    let width = words
        .iter()
        .map(|w| w.text.chars().count())
        .max()
        .unwrap_or(0);

    words
        .iter()
        .map(|w| format!("{:>6}  {:<width$}  lang={}\n", w.id, w.text, w.language_id))
        .collect()
}
