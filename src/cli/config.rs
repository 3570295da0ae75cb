//! Configuration inspection commands.

use crate::cli::common::{to_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Show or initialize the configuration file
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    /// Use this config file instead of the platform default
    #[arg(long, value_name = "FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Config operation
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config operations
#[derive(Debug, Clone, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the config file path
    Path,
    /// Write the default configuration if no file exists
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl ConfigArgs {
    fn path(&self) -> CliResult<PathBuf> {
        match &self.file {
            Some(path) => Ok(path.clone()),
            None => Config::config_file_path()
                .map_err(|e| CliError::io(format!("Failed to resolve config path: {e}"))),
        }
    }

    /// Execute the config command
    pub fn execute(&self) -> CliResult<()> {
        let path = self.path()?;

        match &self.command {
            ConfigCommand::Show { json } => {
                let config = Config::load_from(&path)
                    .map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?;
                if *json {
                    println!("{}", to_json(&config)?);
                } else {
                    let content = toml::to_string_pretty(&config)
                        .map_err(|e| CliError::io(format!("Failed to serialize config: {e}")))?;
                    print!("{content}");
                }
            }
            ConfigCommand::Path => println!("{}", path.display()),
            ConfigCommand::Init { force } => {
                if path.exists() && !force {
                    return Err(CliError::validation(format!(
                        "Config file already exists: {} (use --force to overwrite)",
                        path.display()
                    )));
                }
                Config::default()
                    .save_to(&path)
                    .map_err(|e| CliError::io(format!("Failed to write config: {e:#}")))?;
                info!("Wrote default config to {}", path.display());
                println!("Wrote {}", path.display());
            }
        }

        Ok(())
    }
}
