use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::str::FromStr;
use std::time::Duration;

/// Builds the connection options from the settings. A configured URL wins
/// over the individual fields.
pub fn connect_options(settings: &DatabaseSettings) -> Result<PgConnectOptions, DbError> {
    if let Some(url) = &settings.url {
        return PgConnectOptions::from_str(url)
            .map_err(|e| DbError::ConnectionConfigError(e.to_string()));
    }
    Ok(PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.password)
        .database(&settings.name))
}

/// Establishes a connection pool to the PostgreSQL database.
///
/// The pool lives for the whole process and is shared by every request
/// handler; `acquire_timeout` bounds how long a request waits for a
/// connection instead of stalling indefinitely.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgPool, DbError> {
    let options = connect_options(settings)?;

    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs))
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// A utility function to run database migrations automatically.
///
/// Creates the schema on first start and brings older schemas up to date.
pub async fn run_migrations(pool: &PgPool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(url: Option<&str>) -> DatabaseSettings {
        DatabaseSettings {
            url: url.map(str::to_string),
            host: "db.internal".to_string(),
            port: 6543,
            user: "deportes".to_string(),
            password: "secreto".to_string(),
            name: "liga".to_string(),
            max_connections: 4,
            acquire_timeout_secs: 2,
        }
    }

    #[test]
    fn options_from_individual_fields() {
        let options = connect_options(&settings(None)).unwrap();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "deportes");
        assert_eq!(options.get_database(), Some("liga"));
    }

    #[test]
    fn url_takes_precedence() {
        let options =
            connect_options(&settings(Some("postgres://otro@localhost:5432/copia"))).unwrap();
        assert_eq!(options.get_host(), "localhost");
        assert_eq!(options.get_username(), "otro");
        assert_eq!(options.get_database(), Some("copia"));
    }

    #[test]
    fn malformed_url_is_a_config_error() {
        let err = connect_options(&settings(Some("not a url"))).unwrap_err();
        assert!(matches!(err, DbError::ConnectionConfigError(_)));
    }
}
