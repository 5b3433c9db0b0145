//! Bulk import of annotated word entries from a file or stdin.

use std::path::PathBuf;

use tokio::io::AsyncReadExt;
use tracing::info;
use wortbank_core::{EntryParser, FieldWarning, Importer};

use super::{ConfigSource, connect_store};

/// Input parameters for the Import command strategy.
#[derive(Debug, Clone)]
pub struct ImportInput {
    pub config: ConfigSource,
    /// File to read; stdin when absent
    pub file: Option<PathBuf>,
    /// Overrides `import.language_id` from the config
    pub language_id: Option<i32>,
    /// Print the parsed records instead of storing them
    pub dry_run: bool,
}

/// Strategy for importing words.
///
/// With `dry_run` no config or database is needed: the records are printed
/// as JSON and the command stops there.
#[derive(Debug, Clone, Copy)]
pub struct ImportStrategy;

impl super::CommandStrategy for ImportStrategy {
    type Input = ImportInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let raw = read_input(input.file.as_ref()).await?;

        if input.dry_run {
            let language_id = match input.language_id {
                Some(id) => id,
                None => input
                    .config
                    .load()
                    .map_or(wortbank_core::DEFAULT_LANGUAGE_ID, |c| c.import.language_id),
            };
            let report = EntryParser::new(language_id).parse_with_report(&raw);
            print_warnings(&report.warnings);
            println!("{}", serde_json::to_string_pretty(&report.records)?);
            return Ok(());
        }

        let (config, store) = connect_store(&input.config).await?;
        let language_id = input.language_id.unwrap_or(config.import.language_id);
        info!("Importing into language {}", language_id);

        let importer = Importer::new(EntryParser::new(language_id), store);
        let outcome = importer.import(&raw).await?;

        print_warnings(&outcome.warnings);
        println!("Imported {} words", outcome.word_ids.len());
        Ok(())
    }
}

async fn read_input(file: Option<&PathBuf>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            info!("Reading entries from {}", path.display());
            Ok(tokio::fs::read_to_string(path).await?)
        }
        None => {
            info!("Reading entries from stdin");
            let mut raw = String::new();
            tokio::io::stdin().read_to_string(&mut raw).await?;
            Ok(raw)
        }
    }
}

fn print_warnings(warnings: &[FieldWarning]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}
