use super::{IdPath, JsonBody, MessageResponse};
use crate::error::{AppError, OrNotFound};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use axum_extra::extract::WithRejection;
use core_types::{Deporte, DeporteInput};
use std::sync::Arc;

const NOT_FOUND: &str = "Deporte no encontrado";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_deportes).post(create_deporte))
        .route(
            "/:id",
            get(get_deporte).put(update_deporte).delete(delete_deporte),
        )
}

/// # GET /api/deportes
pub async fn list_deportes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Deporte>>, AppError> {
    let deportes = state.repo.list_deportes().await?;
    Ok(Json(deportes))
}

/// # GET /api/deportes/:id
pub async fn get_deporte(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
) -> Result<Json<Deporte>, AppError> {
    let deporte = state.repo.get_deporte(id).await.or_not_found(NOT_FOUND)?;
    Ok(Json(deporte))
}

/// # POST /api/deportes
pub async fn create_deporte(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(input), _): JsonBody<DeporteInput>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let nuevo = input.validate()?;
    let id = state.repo.create_deporte(&nuevo).await?;
    tracing::info!(id, nombre = %nuevo.nombre, "Deporte created.");
    Ok((
        StatusCode::CREATED,
        MessageResponse::created("Deporte creado exitosamente", id),
    ))
}

/// # PUT /api/deportes/:id
pub async fn update_deporte(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(input), _): JsonBody<DeporteInput>,
) -> Result<Json<MessageResponse>, AppError> {
    let cambios = input.validate()?;
    state
        .repo
        .update_deporte(id, &cambios)
        .await
        .or_not_found(NOT_FOUND)?;
    Ok(MessageResponse::new("Deporte actualizado exitosamente"))
}

/// # DELETE /api/deportes/:id
pub async fn delete_deporte(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    state.repo.delete_deporte(id).await.or_not_found(NOT_FOUND)?;
    Ok(MessageResponse::new("Deporte eliminado exitosamente"))
}
