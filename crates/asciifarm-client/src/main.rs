//! asciifarm - terminal client for AsciiFarm
//!
//! Collects settings from the settings file, the environment and the command
//! line, and resolves them into the connection and display configuration the
//! client runs with.

use anyhow::{Context, Result};
use asciifarm_core::config::{apply_env_overrides, load_settings, resolve_config};
use asciifarm_core::logging;
use clap::Parser;
use tracing::info;

mod cli;
mod summary;

use cli::Cli;

fn main() {
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut settings = load_settings(cli.config.as_deref()).context("Failed to load settings")?;
    apply_env_overrides(&mut settings);

    let mut request = settings.to_request();
    cli.apply_to(&mut request);

    let config = resolve_config(&request)?;
    info!(
        name = %config.name,
        socket = %config.socket_kind,
        address = %config.address,
        colours = config.colours,
        "resolved client configuration"
    );

    print!("{}", summary::render(&config));
    Ok(())
}
