//! Layered configuration for PolicyHub.
//!
//! Values are read from `config/default.*`, then `config/{RUN_ENV}.*`, then
//! `POLICYHUB__*` environment variables. A `.env` file is loaded once before
//! the environment is consulted.

use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::PathBuf;
use tracing::debug;

pub mod models;
pub use models::*;

/// Prefix for environment overrides, e.g. `POLICYHUB__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "POLICYHUB";

/// Loads the application configuration from files and the environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let config_dir = env::var("POLICYHUB_CONFIG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config"));

    let default_path = config_dir.join("default");
    let env_path = config_dir.join(&run_env);

    debug!("Loading config from {} (RUN_ENV={})", config_dir.display(), run_env);

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

    let raw_config: AppConfig = builder.build()?.try_deserialize()?;
    raw_config
        .subscription
        .validate()
        .map_err(ConfigError::Message)?;
    Ok(apply_database_url_override(
        raw_config,
        env::var("DATABASE_URL").ok(),
    ))
}

/// `DATABASE_URL` wins over whatever the files or prefixed variables set.
pub fn apply_database_url_override(mut config: AppConfig, database_url: Option<String>) -> AppConfig {
    if let Some(url) = database_url.filter(|url| !url.is_empty()) {
        match config.database.as_mut() {
            Some(db) => db.url = url,
            None => {
                config.database = Some(DatabaseConfig {
                    url,
                    max_connections: None,
                })
            }
        }
    }
    config
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, at most once.
///
/// `DOTENV_OVERRIDE` names an alternative file; otherwise `.env` is used.
/// A missing file is not an error. Returns the path that was tried.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path = std::env::var("DOTENV_OVERRIDE").unwrap_or_else(|_| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
