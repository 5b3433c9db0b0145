use wortbank_config::Config;

use super::ConfigSource;

/// Strategy for initializing the configuration.
///
/// Creates the default configuration file at `~/wortbank/config.json`, or at
/// the path given with `--config`.
#[derive(Debug, Clone, Copy)]
pub struct InitStrategy;

impl super::CommandStrategy for InitStrategy {
    type Input = ConfigSource;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        Config::create_config_at(&input.resolve()?)
    }
}
