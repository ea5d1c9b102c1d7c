use anyhow::{Context, Result};
use clap::Parser;
use fish_cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("Fish school starting...");
    if let Some(path) = &args.settings {
        log::info!("Settings: {}", path.display());
    }

    let snapshot = fish_cli::run(&args).context("Simulation error")?;

    let json = snapshot.to_json().context("Failed to encode final frame")?;
    println!("{}", json);

    Ok(())
}
