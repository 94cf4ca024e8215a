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
use core_types::{Equipo, EquipoInput};
use std::sync::Arc;

const NOT_FOUND: &str = "Equipo no encontrado";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_equipos).post(create_equipo))
        .route(
            "/:id",
            get(get_equipo).put(update_equipo).delete(delete_equipo),
        )
}

/// # GET /api/equipos
/// Every team with the name of its sport.
pub async fn list_equipos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Equipo>>, AppError> {
    let equipos = state.repo.list_equipos().await?;
    Ok(Json(equipos))
}

/// # GET /api/equipos/:id
pub async fn get_equipo(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
) -> Result<Json<Equipo>, AppError> {
    let equipo = state.repo.get_equipo(id).await.or_not_found(NOT_FOUND)?;
    Ok(Json(equipo))
}

/// # POST /api/equipos
pub async fn create_equipo(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(input), _): JsonBody<EquipoInput>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let nuevo = input.validate()?;
    let id = state.repo.create_equipo(&nuevo).await?;
    tracing::info!(id, nombre = %nuevo.nombre, id_deporte = nuevo.id_deporte, "Equipo created.");
    Ok((
        StatusCode::CREATED,
        MessageResponse::created("Equipo creado exitosamente", id),
    ))
}

/// # PUT /api/equipos/:id
pub async fn update_equipo(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(input), _): JsonBody<EquipoInput>,
) -> Result<Json<MessageResponse>, AppError> {
    let cambios = input.validate()?;
    state
        .repo
        .update_equipo(id, &cambios)
        .await
        .or_not_found(NOT_FOUND)?;
    Ok(MessageResponse::new("Equipo actualizado exitosamente"))
}

/// # DELETE /api/equipos/:id
pub async fn delete_equipo(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    state.repo.delete_equipo(id).await.or_not_found(NOT_FOUND)?;
    Ok(MessageResponse::new("Equipo eliminado exitosamente"))
}
