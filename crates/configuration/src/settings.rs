use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub server: ServerSettings,
    pub log: LogSettings,
}

/// Connection parameters for the PostgreSQL database.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    /// A full connection URL. When set it takes precedence over the
    /// individual host/port/user/password/name fields.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    /// Upper bound of the shared connection pool.
    pub max_connections: u32,
    /// How long a request may wait for a pooled connection.
    pub acquire_timeout_secs: u64,
}

/// Parameters of the HTTP listener.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    /// The first port tried. On `AddrInUse` the next port is tried.
    pub port: u16,
    /// Total number of ports tried before giving up.
    pub bind_attempts: u16,
    /// The only origin allowed by CORS (the browser client).
    pub cors_origin: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogSettings {
    /// Default filter directive when `RUST_LOG` is not set (e.g. "info").
    pub level: String,
    /// When set, logs are also written to a daily-rolling file in this directory.
    pub dir: Option<String>,
}
