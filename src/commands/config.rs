//! Configuration management CLI commands.

use clap::{Args, Subcommand};

use memberhub_core::config::AppConfig;
use memberhub_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            output::print_item(config, format);
            if format == OutputFormat::Table {
                output::print_kv("Store", &config.database.provider);
                output::print_kv(
                    "Snapshot",
                    config.database.snapshot_path.as_deref().unwrap_or("none"),
                );
            }
        }
    }

    Ok(())
}
