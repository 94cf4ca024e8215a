use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use core_types::CoreError;
use database::DbError;
use serde::Serialize;
use thiserror::Error;

/// Stable error codes returned in the `error` field of every failure body.
pub mod codes {
    pub const VALIDATION: &str = "validacion";
    pub const NOT_FOUND: &str = "no_encontrado";
    pub const INVALID_REFERENCE: &str = "referencia_invalida";
    pub const INTERNAL: &str = "error_interno";
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] DbError),
    #[error("Validation error: {0}")]
    Validation(#[from] CoreError),
    #[error("Rejected request ({status}): {detail}")]
    Rejected { status: StatusCode, detail: String },
    #[error("Not found: {0}")]
    NotFound(String),
}

impl AppError {
    /// An extractor rejection keeps its status, except that a body which
    /// parsed but did not fit the payload shape is a plain 400.
    fn rejected(status: StatusCode, detail: String) -> Self {
        let status = match status {
            StatusCode::UNPROCESSABLE_ENTITY => StatusCode::BAD_REQUEST,
            other => other,
        };
        AppError::Rejected { status, detail }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::rejected(rejection.status(), rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::rejected(rejection.status(), rejection.body_text())
    }
}

/// The JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errores: Option<Vec<String>>,
}

impl ErrorBody {
    fn new(error: &'static str, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
            errores: None,
        }
    }
}

/// Maps `DbError::NotFound` to a resource-specific 404 message.
pub trait OrNotFound<T> {
    fn or_not_found(self, message: &str) -> Result<T, AppError>;
}

impl<T> OrNotFound<T> for Result<T, DbError> {
    fn or_not_found(self, message: &str) -> Result<T, AppError> {
        self.map_err(|e| match e {
            DbError::NotFound => AppError::NotFound(message.to_string()),
            other => AppError::Database(other),
        })
    }
}

/// Converts our custom `AppError` into an HTTP response.
///
/// Driver and SQL details are logged here and never sent to the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(CoreError::Validation { message, errores }) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    errores: Some(errores),
                    ..ErrorBody::new(codes::VALIDATION, message)
                },
            ),
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorBody::new(codes::VALIDATION, err.to_string()),
            ),
            AppError::Rejected { status, detail } if status.is_server_error() => {
                tracing::error!(%status, %detail, "Extractor failure.");
                (
                    status,
                    ErrorBody::new(codes::INTERNAL, "Error interno del servidor"),
                )
            }
            AppError::Rejected { status, detail } => {
                let message = match status {
                    StatusCode::PAYLOAD_TOO_LARGE => "El cuerpo de la solicitud es demasiado grande",
                    _ => "Solicitud mal formada",
                };
                (
                    status,
                    ErrorBody {
                        errores: Some(vec![detail]),
                        ..ErrorBody::new(codes::VALIDATION, message)
                    },
                )
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorBody::new(codes::NOT_FOUND, message),
            ),
            AppError::Database(DbError::NotFound) => (
                StatusCode::NOT_FOUND,
                ErrorBody::new(codes::NOT_FOUND, "Recurso no encontrado"),
            ),
            AppError::Database(DbError::ForeignKeyViolation(constraint)) => {
                tracing::warn!(%constraint, "Foreign key violation.");
                (
                    StatusCode::CONFLICT,
                    ErrorBody::new(
                        codes::INVALID_REFERENCE,
                        "El registro referenciado no existe o está en uso",
                    ),
                )
            }
            AppError::Database(db_err) => {
                tracing::error!(error = ?db_err, "Database error.");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody::new(codes::INTERNAL, "Error interno del servidor"),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_resource_message() {
        let result: Result<(), DbError> = Err(DbError::NotFound);
        let err = result.or_not_found("Equipo no encontrado").unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref m) if m == "Equipo no encontrado"));
    }

    #[test]
    fn other_database_errors_pass_through() {
        let result: Result<(), DbError> = Err(DbError::CorruptRow("x".to_string()));
        let err = result.or_not_found("Equipo no encontrado").unwrap_err();
        assert!(matches!(err, AppError::Database(DbError::CorruptRow(_))));
    }

    #[test]
    fn status_codes_follow_error_kind() {
        let cases = [
            (AppError::from(CoreError::missing("El nombre es requerido")), StatusCode::BAD_REQUEST),
            (AppError::NotFound("Deporte no encontrado".into()), StatusCode::NOT_FOUND),
            (
                AppError::rejected(StatusCode::UNPROCESSABLE_ENTITY, "Nombre: invalid type".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                AppError::rejected(StatusCode::PAYLOAD_TOO_LARGE, "length limit exceeded".into()),
                StatusCode::PAYLOAD_TOO_LARGE,
            ),
            (
                AppError::from(DbError::ForeignKeyViolation("equipo_id_deporte_fkey".into())),
                StatusCode::CONFLICT,
            ),
            (
                AppError::from(DbError::CorruptRow("jugador 1".into())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
