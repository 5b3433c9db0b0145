#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};
use wortbank_core::{DEFAULT_LIMIT, NewLanguage};

mod command;

use command::{
    CommandStrategy, ConfigSource, ImportInput, ImportStrategy, InfoStrategy, InitStrategy,
    LanguageAction, LanguageStrategy, SearchInput, SearchStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "wortbank")]
#[command(about = "Vocabulary list with bulk import", long_about = None)]
struct Cli {
    /// Config file (default: ~/wortbank/config.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration
    Init,
    /// Show version
    Version,
    /// Show configuration and database status
    Info,
    /// Import annotated word entries
    Import {
        /// File with entries separated by blank lines (stdin if omitted)
        file: Option<PathBuf>,

        /// Language id stamped on every imported word
        #[arg(short, long)]
        language: Option<i32>,

        /// Print parsed entries as JSON without touching the database
        #[arg(long)]
        dry_run: bool,
    },
    /// Search headwords
    Search {
        text: String,

        /// Only words of this language id
        #[arg(short, long)]
        language: Option<i32>,

        /// Maximum number of results
        #[arg(short = 'n', long)]
        limit: Option<u64>,
    },
    /// Manage supported languages
    Language {
        #[command(subcommand)]
        action: LanguageCommand,
    },
}

#[derive(Subcommand)]
enum LanguageCommand {
    /// List languages, newest first
    List {
        #[arg(short = 'n', long, default_value_t = DEFAULT_LIMIT)]
        limit: u64,
    },
    /// Show one language
    Show { id: i32 },
    /// Add a language
    Add {
        /// Short code such as 'de' or 'sv' (max 5 characters)
        #[arg(long)]
        code: String,

        /// Display name (max 50 characters)
        #[arg(long)]
        name: String,

        /// Language reads right-to-left
        #[arg(long)]
        rtl: bool,
    },
    /// Remove a language and its words
    Remove { id: i32 },
}

impl From<LanguageCommand> for LanguageAction {
    fn from(command: LanguageCommand) -> Self {
        match command {
            LanguageCommand::List { limit } => Self::List { limit },
            LanguageCommand::Show { id } => Self::Show { id },
            LanguageCommand::Add { code, name, rtl } => {
                Self::Add(NewLanguage::new(code, name).rtl(rtl))
            }
            LanguageCommand::Remove { id } => Self::Remove { id },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let config = ConfigSource { path: cli.config };

    match cli.command {
        Commands::Init => InitStrategy.execute(config).await,
        Commands::Version => VersionStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(config).await,
        Commands::Import {
            file,
            language,
            dry_run,
        } => {
            ImportStrategy
                .execute(ImportInput {
                    config,
                    file,
                    language_id: language,
                    dry_run,
                })
                .await
        }
        Commands::Search {
            text,
            language,
            limit,
        } => {
            SearchStrategy
                .execute(SearchInput {
                    config,
                    text,
                    language_id: language,
                    limit,
                })
                .await
        }
        Commands::Language { action } => {
            LanguageStrategy
                .execute((config, action.into()))
                .await
        }
    }
}
