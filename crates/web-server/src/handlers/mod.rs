//! One router per resource, each mounted under `/api/<resource>`.

use crate::error::AppError;
use axum::{extract::Path, Json};
use axum_extra::extract::WithRejection;
use core_types::Id;
use serde::Serialize;

pub mod deportes;
pub mod equipos;
pub mod estadisticas;
pub mod jugadores;

/// A JSON body whose parse failures are reported through `AppError`.
pub type JsonBody<T> = WithRejection<Json<T>, AppError>;

/// A numeric `:id` path segment whose parse failures are reported through `AppError`.
pub type IdPath = WithRejection<Path<Id>, AppError>;

/// Body of successful writes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
}

impl MessageResponse {
    pub fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
            id: None,
        })
    }

    pub fn created(message: &str, id: Id) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
            id: Some(id),
        })
    }
}
