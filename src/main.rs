use std::path::Path;

use anyhow::Result;
use clap::Parser;
use inventory_cli::{
    cli::{run_grades_session, run_inventory_menu, Args, Commands},
    utils::Config,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => Config::from_file(Path::new(path)),
        None => Config::from_env(),
    }
    .map_err(|e| {
        eprintln!("Failed to load configuration: {:#}", e);
        e
    })?;

    // --verbose wins over RUST_LOG, which wins over LOG_LEVEL
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("🦀 Inventory CLI starting...");
    tracing::info!(
        "Configuration loaded for {} environment",
        config.environment
    );

    match args.mode() {
        Commands::Inventory => run_inventory_menu(&config)?,
        Commands::Grades => run_grades_session(&config)?,
    }

    tracing::info!("🦀 Inventory CLI stopped");
    Ok(())
}
