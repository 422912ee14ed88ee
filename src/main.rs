use anyhow::Result;
use taskmaster::constants::CONFIG_GENERATED;
use taskmaster::{config::Config, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().nth(1).as_deref() == Some("--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        println!("{}: {}", CONFIG_GENERATED, path.display());
        return Ok(());
    }

    let config = Config::load()?;

    if config.logging.enabled {
        let log_path = config.logging.resolve_file()?;
        logger::init_file_logging(&log_path, log::LevelFilter::Debug)?;
        log::info!("TaskMaster starting, logging to {}", log_path.display());
    }

    // Run the TUI application
    ui::run_app(config, logger::Logger::new()).await?;

    Ok(())
}
