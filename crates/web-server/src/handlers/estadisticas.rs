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
use core_types::{Estadistica, EstadisticaInput};
use std::sync::Arc;

const NOT_FOUND: &str = "Estadística no encontrada";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_estadisticas).post(create_estadistica))
        .route("/jugador/:id", get(list_estadisticas_por_jugador))
        .route(
            "/:id",
            get(get_estadistica)
                .put(update_estadistica)
                .delete(delete_estadistica),
        )
}

/// # GET /api/estadisticas
pub async fn list_estadisticas(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Estadistica>>, AppError> {
    let estadisticas = state.repo.list_estadisticas().await?;
    Ok(Json(estadisticas))
}

/// # GET /api/estadisticas/jugador/:id
/// An unknown player simply has no statistics.
pub async fn list_estadisticas_por_jugador(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id_jugador), _): IdPath,
) -> Result<Json<Vec<Estadistica>>, AppError> {
    let estadisticas = state.repo.list_estadisticas_por_jugador(id_jugador).await?;
    Ok(Json(estadisticas))
}

/// # GET /api/estadisticas/:id
pub async fn get_estadistica(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
) -> Result<Json<Estadistica>, AppError> {
    let estadistica = state
        .repo
        .get_estadistica(id)
        .await
        .or_not_found(NOT_FOUND)?;
    Ok(Json(estadistica))
}

/// # POST /api/estadisticas
pub async fn create_estadistica(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(input), _): JsonBody<EstadisticaInput>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let nueva = input.validate()?;
    let id = state.repo.create_estadistica(&nueva).await?;
    Ok((
        StatusCode::CREATED,
        MessageResponse::created("Estadística creada exitosamente", id),
    ))
}

/// # PUT /api/estadisticas/:id
pub async fn update_estadistica(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(input), _): JsonBody<EstadisticaInput>,
) -> Result<Json<MessageResponse>, AppError> {
    let cambios = input.validate()?;
    state
        .repo
        .update_estadistica(id, &cambios)
        .await
        .or_not_found(NOT_FOUND)?;
    Ok(MessageResponse::new("Estadística actualizada exitosamente"))
}

/// # DELETE /api/estadisticas/:id
pub async fn delete_estadistica(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .repo
        .delete_estadistica(id)
        .await
        .or_not_found(NOT_FOUND)?;
    Ok(MessageResponse::new("Estadística eliminada exitosamente"))
}
