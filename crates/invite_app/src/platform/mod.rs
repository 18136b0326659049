mod app;
mod config;
mod effects;
mod logging;
mod ui;

use anyhow::Context;
use invite_logging::invite_info;

use crate::cli::{Cli, Command, LogArg};

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    logging::initialize(match cli.log {
        LogArg::File => logging::LogDestination::File,
        LogArg::Terminal => logging::LogDestination::Terminal,
        LogArg::Both => logging::LogDestination::Both,
        LogArg::Off => logging::LogDestination::Off,
    });

    let config = config::load_config(
        cli.config.as_deref(),
        std::env::var(config::BASE_URL_ENV).ok(),
        cli.base_url,
    )
    .context("invalid configuration")?;
    invite_info!("starting with base_url={:?}", config.base_url);

    match cli.command {
        Some(Command::Presets) => {
            app::print_presets();
            Ok(())
        }
        Some(Command::Single(args)) => app::run_single(&config, args),
        Some(Command::Bulk(args)) => app::run_bulk(&config, args),
        Some(Command::Interactive) | None => app::run_interactive(&config),
    }
}
