use crate::error::ConfigError;
use std::collections::HashMap;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{DatabaseSettings, LogSettings, ServerSettings, Settings};

/// Name of the optional configuration file (`deportes.toml`) in the working directory.
pub const CONFIG_FILE: &str = "deportes";

/// Environment variables read on top of the configuration file, and the
/// setting each one overrides.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("DATABASE_URL", "database.url"),
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASSWORD", "database.password"),
    ("DB_NAME", "database.name"),
    ("DB_MAX_CONNECTIONS", "database.max_connections"),
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("CORS_ORIGIN", "server.cors_origin"),
    ("LOG_LEVEL", "log.level"),
    ("LOG_DIR", "log.dir"),
];

/// Loads the application configuration.
///
/// Sources, from lowest to highest precedence: built-in defaults, the
/// optional `deportes.toml` file, a `.env` file, and the process environment.
pub fn load_config() -> Result<Settings, ConfigError> {
    dotenvy::dotenv().ok();
    let env: HashMap<String, String> = std::env::vars().collect();
    load_config_from(Some(CONFIG_FILE), &env)
}

/// Builds the settings from an optional config file and an explicit set of
/// environment variables.
pub fn load_config_from(
    file: Option<&str>,
    env: &HashMap<String, String>,
) -> Result<Settings, ConfigError> {
    let mut builder = config::Config::builder()
        .set_default("database.host", "localhost")?
        .set_default("database.port", 5432)?
        .set_default("database.user", "postgres")?
        .set_default("database.password", "")?
        .set_default("database.name", "deportes")?
        .set_default("database.max_connections", 10)?
        .set_default("database.acquire_timeout_secs", 5)?
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 3000)?
        .set_default("server.bind_attempts", 5)?
        .set_default("server.cors_origin", "http://localhost:5173")?
        .set_default("log.level", "info")?;

    if let Some(file) = file {
        builder = builder.add_source(config::File::with_name(file).required(false));
    }

    for (var, key) in ENV_OVERRIDES {
        builder = builder.set_override_option(*key, env.get(*var).cloned())?;
    }

    let settings = builder.build()?.try_deserialize::<Settings>()?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    if settings.server.bind_attempts == 0 {
        return Err(ConfigError::ValidationError(
            "server.bind_attempts must be at least 1".to_string(),
        ));
    }
    if settings.database.max_connections == 0 {
        return Err(ConfigError::ValidationError(
            "database.max_connections must be at least 1".to_string(),
        ));
    }
    if settings.server.cors_origin.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "server.cors_origin must not be empty".to_string(),
        ));
    }
    Ok(())
}
