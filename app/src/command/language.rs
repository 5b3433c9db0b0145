use wortbank_core::{Language, LanguageRepo, NewLanguage};

use super::{ConfigSource, connect_store};

/// What to do with the language table.
#[derive(Debug, Clone)]
pub enum LanguageAction {
    List { limit: u64 },
    Show { id: i32 },
    Add(NewLanguage),
    Remove { id: i32 },
}

/// Strategy for managing supported languages.
#[derive(Debug, Clone, Copy)]
pub struct LanguageStrategy;

impl super::CommandStrategy for LanguageStrategy {
    type Input = (ConfigSource, LanguageAction);

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let (source, action) = input;

        // Validate before opening a connection.
        if let LanguageAction::Add(new) = &action {
            new.validate()?;
        }

        let (_, store) = connect_store(&source).await?;

        match action {
            LanguageAction::List { limit } => {
                let languages = store.all(limit).await?;
                if languages.is_empty() {
                    println!("No languages yet. Add one with 'wortbank language add'.");
                }
                for language in &languages {
                    println!("{}", format_language(language));
                }
            }
            LanguageAction::Show { id } => match store.by_id(id).await? {
                Some(language) => println!("{}", format_language(&language)),
                None => anyhow::bail!("Language {id} not found"),
            },
            LanguageAction::Add(new) => {
                let language = store.create(&new).await?;
                println!("Created {}", format_language(&language));
            }
            LanguageAction::Remove { id } => {
                if store.delete(id).await? {
                    println!("Removed language {id}");
                } else {
                    anyhow::bail!("Language {id} not found");
                }
            }
        }

        Ok(())
    }
}

fn format_language(language: &Language) -> String {
    let direction = if language.is_rtl { " (rtl)" } else { "" };
    format!(
        "{:>4}  {:<5}  {}{direction}",
        language.id, language.code, language.name
    )
}
