use tracing::info;
use wortbank_store::WordStore;

use super::ConfigSource;

/// Strategy for displaying configuration information.
///
/// Prints the config file location, the database URL (password masked) and
/// whether a connection can be opened, followed by the import and search
/// defaults.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ConfigSource;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let path = input.resolve()?;
        let config = input.load()?;

        println!("=== wortbank Configuration ===\n");
        println!("Config file: {}", path.display());
        println!();

        println!("Database:");
        let db_url = &config.database.url;
        println!("  URL: {}", mask_database_url(db_url));

        info!("Testing database connection");
        match WordStore::connect(db_url).await {
            Ok(_) => {
                println!("  Status: Connected");
            }
            Err(e) => {
                println!("  Status: Connection failed");
                println!("  Error: {e}");
            }
        }
        println!();

        println!("Import:");
        println!("  Language ID: {}", config.import.language_id);
        println!();

        println!("Search:");
        println!("  Limit: {}", config.search.limit);

        Ok(())
    }
}

fn mask_database_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };

    let Some((credentials, after_at)) = rest.split_once('@') else {
        return url.to_string();
    };

    let Some((username, _password)) = credentials.split_once(':') else {
        return url.to_string();
    };

    format!("{scheme}://{username}:***@{after_at}")
}
