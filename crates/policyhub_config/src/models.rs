// --- File: crates/policyhub_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    pub url: String, // e.g. sqlite:policyhub.db, overridden by DATABASE_URL
    /// Upper bound for the connection pool; in-memory SQLite always uses one.
    #[serde(default)]
    pub max_connections: Option<u32>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:policyhub.db".to_string(),
            max_connections: None,
        }
    }
}

// --- Subscription Config ---
/// Length of the access windows handed out on registration and on payment.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SubscriptionConfig {
    #[serde(default = "default_window_days")]
    pub trial_days: i64,
    #[serde(default = "default_window_days")]
    pub renewal_days: i64,
}

impl Default for SubscriptionConfig {
    fn default() -> Self {
        Self {
            trial_days: default_window_days(),
            renewal_days: default_window_days(),
        }
    }
}

fn default_window_days() -> i64 {
    30
}

/// Longest accepted window, about a century.
pub const MAX_WINDOW_DAYS: i64 = 36_500;

impl SubscriptionConfig {
    /// Both windows must be between one day and [`MAX_WINDOW_DAYS`].
    pub fn validate(&self) -> Result<(), String> {
        for (name, days) in [("trial_days", self.trial_days), ("renewal_days", self.renewal_days)] {
            if !(1..=MAX_WINDOW_DAYS).contains(&days) {
                return Err(format!(
                    "subscription.{name} must be between 1 and {MAX_WINDOW_DAYS}, got {days}"
                ));
            }
        }
        Ok(())
    }
}

fn default_database() -> Option<DatabaseConfig> {
    Some(DatabaseConfig::default())
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default = "default_database")]
    pub database: Option<DatabaseConfig>,

    #[serde(default)]
    pub subscription: SubscriptionConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            database: default_database(),
            subscription: SubscriptionConfig::default(),
        }
    }
}
