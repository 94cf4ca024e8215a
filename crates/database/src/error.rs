use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Invalid database connection settings: {0}")]
    ConnectionConfigError(String),

    #[error("Database query failed: {0}")]
    QueryError(sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("The requested data was not found in the database.")]
    NotFound,

    /// A write referenced a missing parent row, or a delete hit a row that
    /// other rows still reference. Carries the violated constraint name.
    #[error("Foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    #[error("Stored row is inconsistent: {0}")]
    CorruptRow(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = err {
            return DbError::NotFound;
        }
        if let Some(db_err) = err.as_database_error() {
            if db_err.is_foreign_key_violation() {
                let constraint = db_err.constraint().unwrap_or("unknown").to_string();
                return DbError::ForeignKeyViolation(constraint);
            }
        }
        DbError::QueryError(err)
    }
}
