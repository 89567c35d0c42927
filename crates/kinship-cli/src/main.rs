//! Kinship CLI
//!
//! Browse a people dataset from the terminal or over HTTP.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use kinship_cli::KinshipConfig;
use kinship_cli::cli::{Cli, Command};
use kinship_cli::{commands, config_handlers, logging};
use kinship_core::ConfigManager;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        // Config commands must work even when the current file is broken.
        Command::Config { action } => {
            logging::init_logging("warn", cli.verbose);
            config_handlers::handle_config_command(cli.config.as_deref(), action)?;
        }
        command => {
            let mut config = KinshipConfig::load(cli.config.as_deref())?;
            logging::init_logging(&config.logging.filter, cli.verbose);
            run(command, &mut config).await?;
        }
    }

    Ok(())
}

async fn run(command: Command, config: &mut KinshipConfig) -> kinship_cli::Result<()> {
    match command {
        Command::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            commands::serve(config).await
        }
        Command::List { selected } => {
            let source = config.people_source()?;
            let output = commands::list(source.as_ref(), selected.as_deref()).await?;
            println!("{output}");
            Ok(())
        }
        Command::Config { .. } => Ok(()),
    }
}
