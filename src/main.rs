mod config;
mod consts;
mod data;
mod logging;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::{error::Error, path::PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the outage dashboard
    Start {
        /// Run without the terminal UI, printing one metrics refresh to stdout.
        #[arg(long)]
        headless: bool,

        /// Enable the dashboard background color fill.
        #[arg(long)]
        with_background: bool,

        /// Path to the configuration file. Defaults to ~/.outage-dashboard/config.json
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Print the configured region catalog
    Regions {
        /// Path to the configuration file. Defaults to ~/.outage-dashboard/config.json
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Write the default configuration file
    Init {
        /// Path to the configuration file. Defaults to ~/.outage-dashboard/config.json
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Overwrite an existing configuration file.
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            with_background,
            config,
        } => {
            let session = setup_session(config)?;
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background).await
            }
        }
        Command::Regions { config } => {
            let session = setup_session(config)?;
            for region in &session.config.regions {
                println!("{}", region);
            }
            Ok(())
        }
        Command::Init { config, force } => {
            let config_path = match config {
                Some(path) => path,
                None => get_config_path()?,
            };
            if config_path.exists() && !force {
                return Err(format!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    config_path.display()
                )
                .into());
            }
            Config::default()
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            println!("Wrote default config to {}", config_path.display());
            Ok(())
        }
    }
}
