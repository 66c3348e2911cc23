//! CLI command definitions and dispatch.

pub mod company;
pub mod config;
pub mod profession;

use std::future::Future;

use clap::{Args, Parser, Subcommand};
use tracing::error;

use memberhub_core::config::AppConfig;
use memberhub_core::error::AppError;
use memberhub_core::types::lookup::ListFilters;
use memberhub_core::types::pagination::{PageRequest, PageResponse};

use crate::app::AppContext;
use crate::output::OutputFormat;

/// MemberHub reference data administration
#[derive(Debug, Parser)]
#[command(name = "memberhub", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Company management
    Company(company::CompanyArgs),
    /// Profession management
    Profession(profession::ProfessionArgs),
    /// Configuration management
    Config(config::ConfigArgs),
}

impl Cli {
    /// Execute the CLI command against a loaded configuration
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Config(args) => config::execute(args, &config, self.format),
            Commands::Company(args) => {
                let app = AppContext::build(config).await?;
                let result = company::execute(args, &app, self.format).await;
                finish(result, app.shutdown().await)
            }
            Commands::Profession(args) => {
                let app = AppContext::build(config).await?;
                let result = profession::execute(args, &app, self.format).await;
                finish(result, app.shutdown().await)
            }
        }
    }
}

/// Outcome of a command followed by shutdown.
///
/// A command failure wins over a shutdown failure, which is then only logged.
fn finish(result: Result<(), AppError>, shutdown: Result<(), AppError>) -> Result<(), AppError> {
    match (result, shutdown) {
        (Err(err), Err(shutdown_err)) => {
            error!(error = %shutdown_err, "Shutdown failed after command error");
            Err(err)
        }
        (result, shutdown) => result.and(shutdown),
    }
}

/// Listing options shared by record commands
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Name prefix to search for
    #[arg(short, long)]
    pub search: Option<String>,
    /// Page to show (1-based)
    #[arg(short, long, default_value_t = 1)]
    pub page: u64,
    /// Records per page (defaults to `pagination.default_page_size`)
    #[arg(long)]
    pub page_size: Option<u64>,
    /// List every record without paging
    #[arg(long, conflicts_with_all = ["page", "page_size"])]
    pub all: bool,
}

impl ListArgs {
    /// Filters described by these options
    pub fn filters(&self) -> ListFilters {
        ListFilters {
            search: self.search.clone(),
        }
    }

    /// First page request, bounded by the configured sizes
    pub fn first_page(&self, config: &AppConfig) -> PageRequest {
        let size = self
            .page_size
            .unwrap_or(config.pagination.default_page_size);
        PageRequest::bounded(1, size, config.pagination.max_page_size)
    }
}

/// Fetch pages 1..=`target` in order so each page has its cursor.
///
/// Stops early at the last page.
pub async fn walk_to_page<T, F, Fut>(first: PageRequest, target: u64, mut fetch: F) -> PageResponse<T>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = PageResponse<T>>,
{
    let mut page = fetch(first).await;
    for number in 2..=target {
        if !page.pagination.has_next_page {
            break;
        }
        page = fetch(PageRequest {
            page: number,
            ..first
        })
        .await;
    }
    page
}

/// Render an optional field for table output
pub fn or_dash(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}
