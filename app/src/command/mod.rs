//! Static strategy pattern for CLI commands.
//!
//! Each subcommand is a separate strategy type with its own input type, so
//! dispatch in `main` is monomorphized and every command can be tested on its
//! own.

use std::path::PathBuf;

use tracing::info;
use wortbank_config::Config;
use wortbank_store::WordStore;

mod import;
mod info;
mod init;
mod language;
mod search;
mod version;

pub use import::{ImportInput, ImportStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use language::{LanguageAction, LanguageStrategy};
pub use search::{SearchInput, SearchStrategy};
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Example
/// ```rust,ignore
/// struct MyStrategy;
///
/// impl CommandStrategy for MyStrategy {
///     type Input = MyInput;
///
///     async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
///         // Command logic here
///         Ok(())
///     }
/// }
/// ```
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Config file chosen on the command line, or the default location.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
    pub path: Option<PathBuf>,
}

impl ConfigSource {
    pub fn load(&self) -> anyhow::Result<Config> {
        match &self.path {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
    }

    pub fn resolve(&self) -> anyhow::Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Config::default_path(),
        }
    }
}

/// Load config and connect to the configured database.
async fn connect_store(source: &ConfigSource) -> anyhow::Result<(Config, WordStore)> {
    let config = source.load()?;
    info!("Connecting to database");
    let store = WordStore::connect(&config.database.url).await?;
    Ok((config, store))
}
