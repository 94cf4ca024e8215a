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
use core_types::{Jugador, JugadorInput};
use std::sync::Arc;

const NOT_FOUND: &str = "Jugador no encontrado";

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_jugadores).post(create_jugador))
        .route("/equipo/:equipo_id", get(list_jugadores_por_equipo))
        .route(
            "/:id",
            get(get_jugador).put(update_jugador).delete(delete_jugador),
        )
}

/// # GET /api/jugadores
/// Every player, ordered by name, with its team and `TipoJugador`.
pub async fn list_jugadores(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Jugador>>, AppError> {
    let jugadores = state.repo.list_jugadores().await?;
    Ok(Json(jugadores))
}

/// # GET /api/jugadores/equipo/:equipo_id
pub async fn list_jugadores_por_equipo(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(equipo_id), _): IdPath,
) -> Result<Json<Vec<Jugador>>, AppError> {
    let jugadores = state.repo.list_jugadores_por_equipo(equipo_id).await?;
    Ok(Json(jugadores))
}

/// # GET /api/jugadores/:id
pub async fn get_jugador(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
) -> Result<Json<Jugador>, AppError> {
    let jugador = state.repo.get_jugador(id).await.or_not_found(NOT_FOUND)?;
    Ok(Json(jugador))
}

/// # POST /api/jugadores
///
/// Requires `Nombre`, `ID_Equipo` and `esJugadorActual`, plus the fields of
/// the chosen kind. Every missing field is reported at once.
pub async fn create_jugador(
    State(state): State<Arc<AppState>>,
    WithRejection(Json(input), _): JsonBody<JugadorInput>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let nuevo = input.validate_create()?;
    let id = state.repo.create_jugador(&nuevo).await?;
    tracing::info!(
        id,
        nombre = %nuevo.nombre,
        tipo = %nuevo.tipo.tipo_jugador(),
        "Jugador created."
    );
    Ok((
        StatusCode::CREATED,
        MessageResponse::created("Jugador creado exitosamente", id),
    ))
}

/// # PUT /api/jugadores/:id
///
/// Base fields are optional; the kind is replaced by the submitted one.
pub async fn update_jugador(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
    WithRejection(Json(input), _): JsonBody<JugadorInput>,
) -> Result<Json<MessageResponse>, AppError> {
    let cambios = input.validate_update()?;
    state
        .repo
        .update_jugador(id, &cambios)
        .await
        .or_not_found(NOT_FOUND)?;
    tracing::info!(id, tipo = %cambios.tipo.tipo_jugador(), "Jugador updated.");
    Ok(MessageResponse::new("Jugador actualizado exitosamente"))
}

/// # DELETE /api/jugadores/:id
/// Also removes the player's statistics.
pub async fn delete_jugador(
    State(state): State<Arc<AppState>>,
    WithRejection(Path(id), _): IdPath,
) -> Result<Json<MessageResponse>, AppError> {
    state.repo.delete_jugador(id).await.or_not_found(NOT_FOUND)?;
    tracing::info!(id, "Jugador deleted.");
    Ok(MessageResponse::new("Jugador eliminado exitosamente"))
}
