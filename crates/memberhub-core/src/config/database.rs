//! Document store configuration.

use serde::{Deserialize, Serialize};

/// Document store connection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Store provider. Only `"memory"` is built in.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// JSON snapshot loaded on connect and written back on close.
    #[serde(default)]
    pub snapshot_path: Option<String>,
    /// Whether the store answers server-side count aggregations.
    ///
    /// When disabled, paginated listings report an estimated total.
    #[serde(default = "default_true")]
    pub count_aggregation: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            snapshot_path: None,
            count_aggregation: true,
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_true() -> bool {
    true
}
