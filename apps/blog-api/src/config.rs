//! Application configuration loaded from environment variables.

use std::env;

use blog_infra::DatabaseConfig;

/// Deployment stage prefix accepted when none is configured.
pub const DEFAULT_STAGE_PREFIX: &str = "/prod";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Name of the posts table. Required; without it every store-backed request fails.
    pub table_name: Option<String>,
    pub database: Option<DatabaseConfig>,
    /// Extra accepted path prefix. Defaults to `/prod`; set blank to disable.
    pub stage_prefix: Option<String>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let parse_or = |key: &str, default: u32| {
            lookup(key)
                .and_then(|s| s.parse().ok())
                .unwrap_or(default)
        };

        let database = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: parse_or("DB_MAX_CONNECTIONS", 10),
                min_connections: parse_or("DB_MIN_CONNECTIONS", 1),
                auto_create_table: lookup("POSTS_TABLE_AUTO_CREATE")
                    .map(|v| v == "true" || v == "1")
                    .unwrap_or(false),
            });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            table_name: lookup("POSTS_TABLE_NAME")
                .map(|name| name.trim().to_string())
                .filter(|name| !name.is_empty()),
            database,
            stage_prefix: normalize_prefix(
                lookup("API_STAGE_PREFIX")
                    .as_deref()
                    .unwrap_or(DEFAULT_STAGE_PREFIX),
            ),
        }
    }
}

/// `prod`, `/prod/` and `/prod` all become `/prod`; blank becomes `None`.
fn normalize_prefix(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{trimmed}"))
    }
}
