//! Application configuration schemas.
//!
//! All configuration structs are deserialized via the `config` crate from
//! an optional TOML file overlaid with `MEMBERHUB__`-prefixed environment
//! variables. Each sub-module represents a logical configuration section.

pub mod database;
pub mod logging;
pub mod pagination;

use serde::{Deserialize, Serialize};
use validator::Validate;

pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::pagination::PaginationConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides.
const ENV_PREFIX: &str = "MEMBERHUB";

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Document store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Listing and page size settings.
    #[serde(default)]
    pub pagination: PaginationConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file and the environment.
    ///
    /// The file is optional; `MEMBERHUB__SECTION__KEY` variables override
    /// whatever it contains.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        let parsed: Self = config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))?;

        parsed.validate()?;
        Ok(parsed)
    }

    /// Check cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.pagination
            .validate()
            .map_err(|e| AppError::configuration(format!("Invalid pagination settings: {e}")))?;

        if self.pagination.default_page_size > self.pagination.max_page_size {
            return Err(AppError::configuration(format!(
                "pagination.default_page_size ({}) exceeds pagination.max_page_size ({})",
                self.pagination.default_page_size, self.pagination.max_page_size
            )));
        }

        match self.database.provider.as_str() {
            "memory" => Ok(()),
            other => Err(AppError::configuration(format!(
                "Unknown database provider: '{other}'. Supported: memory"
            ))),
        }
    }
}
