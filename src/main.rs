use anyhow::Result;
use clap::Parser;
use talentbridge::app_log;
use talentbridge::cli::{handle_command, Cli};
use talentbridge::core::ConfigManager;
use talentbridge::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ConfigManager::load(&cli.overrides())?;
    logging::init(&config.log_file)?;

    app_log!(info, "Starting TalentBridge client");
    app_log!(info, "Environment: {}", config.environment);
    app_log!(info, "Backend: {}", config.backend_url);
    match config.timeout {
        Some(limit) => app_log!(info, "Search timeout: {}s", limit.as_secs()),
        None => app_log!(info, "Search timeout: none"),
    }

    if !handle_command(cli, config).await? {
        std::process::exit(1);
    }
    Ok(())
}
