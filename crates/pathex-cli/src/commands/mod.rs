mod export;
mod inspect;

use pathex_config::PathexConfig;

use crate::cli::{Commands, GlobalFlags};

pub async fn dispatch(
    command: Commands,
    config: &PathexConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Export(args) => export::handle(&args, config, flags).await,
        Commands::Tables => inspect::tables(config, flags).await,
        Commands::Peek(args) => inspect::peek(&args, config, flags).await,
    }
}
