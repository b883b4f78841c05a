use anyhow::{Context, Result};
use clap::Parser;
use patient_registry_core::{Database, Registry};
use patient_registry_tui::tracing_setup::init_tracing;
use patient_registry_tui::{terminal, App, Cli, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli)?;

    init_tracing(&config.log_file(), cli.debug)?;
    tracing::info!(database = %config.database_path.display(), "starting patient registry");

    let db = Database::open(&config.database_path)
        .with_context(|| format!("Failed to open database: {:?}", config.database_path))?;
    let mut app = App::new(Registry::new(db), config.start_fullscreen)?;

    if let Err(err) = terminal::run(&mut app) {
        tracing::error!(error = %err, "registry stopped");
        return Err(err);
    }

    tracing::info!("patient registry closed");
    Ok(())
}
