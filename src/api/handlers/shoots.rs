//! Pending-bucket handlers: CRUD plus move-to-edited.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::api::dto::{MessageResponse, ShootRequest};
use crate::app_state::AppState;
use crate::domain::{EditedShoot, Shoot, ShootId};
use crate::error::{ErrorResponse, TrackerError};

/// `GET /shoots` — List pending shoots.
///
/// # Errors
///
/// Returns [`TrackerError`] on persistence failures.
#[utoipa::path(
    get,
    path = "/api/shoots",
    tag = "Shoots",
    summary = "List pending shoots",
    description = "Returns every pending shoot in storage order.",
    responses(
        (status = 200, description = "Pending shoots", body = Vec<Shoot>),
    )
)]
pub async fn list_shoots(State(state): State<AppState>) -> Result<impl IntoResponse, TrackerError> {
    Ok(Json(state.shoot_service.list_shoots().await?))
}

/// `GET /shoots/:id` — Get one pending shoot.
///
/// # Errors
///
/// Returns [`TrackerError::ShootNotFound`] if the shoot does not exist.
#[utoipa::path(
    get,
    path = "/api/shoots/{id}",
    tag = "Shoots",
    summary = "Get a pending shoot",
    params(
        ("id" = String, Path, description = "Shoot UUID"),
    ),
    responses(
        (status = 200, description = "Pending shoot", body = Shoot),
        (status = 404, description = "Shoot not found", body = ErrorResponse),
    )
)]
pub async fn get_shoot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TrackerError> {
    let id = parse_shoot_id(&id)?;
    Ok(Json(state.shoot_service.get_shoot(id).await?))
}

/// `POST /shoots` — Record a new pending shoot.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidRequest`] on missing or malformed fields.
#[utoipa::path(
    post,
    path = "/api/shoots",
    tag = "Shoots",
    summary = "Create a pending shoot",
    description = "Validates the fields and records a new shoot under a generated id.",
    request_body = ShootRequest,
    responses(
        (status = 201, description = "Shoot created", body = Shoot),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
    )
)]
pub async fn create_shoot(
    State(state): State<AppState>,
    payload: Result<Json<ShootRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TrackerError> {
    let Json(req) = payload?;
    let fields = req.into_fields()?;
    let shoot = state.shoot_service.create_shoot(fields).await?;
    Ok((StatusCode::CREATED, Json(shoot)))
}

/// `PUT /shoots/:id` — Replace the fields of a pending shoot.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidRequest`] on bad fields or
/// [`TrackerError::ShootNotFound`] if the shoot does not exist.
#[utoipa::path(
    put,
    path = "/api/shoots/{id}",
    tag = "Shoots",
    summary = "Update a pending shoot",
    params(
        ("id" = String, Path, description = "Shoot UUID"),
    ),
    request_body = ShootRequest,
    responses(
        (status = 200, description = "Shoot updated", body = Shoot),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "Shoot not found", body = ErrorResponse),
    )
)]
pub async fn update_shoot(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ShootRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TrackerError> {
    let Json(req) = payload?;
    let fields = req.into_fields()?;
    let id = parse_shoot_id(&id)?;
    Ok(Json(state.shoot_service.update_shoot(id, fields).await?))
}

/// `DELETE /shoots/:id` — Delete a pending shoot.
///
/// # Errors
///
/// Returns [`TrackerError::ShootNotFound`] if the shoot does not exist.
#[utoipa::path(
    delete,
    path = "/api/shoots/{id}",
    tag = "Shoots",
    summary = "Delete a pending shoot",
    params(
        ("id" = String, Path, description = "Shoot UUID"),
    ),
    responses(
        (status = 200, description = "Shoot deleted", body = MessageResponse),
        (status = 404, description = "Shoot not found", body = ErrorResponse),
    )
)]
pub async fn delete_shoot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TrackerError> {
    let id = parse_shoot_id(&id)?;
    state.shoot_service.delete_shoot(id).await?;
    Ok(Json(MessageResponse::new("Shoot deleted successfully")))
}

/// `POST /shoots/:id/move-to-edited` — Move a shoot to the edited bucket.
///
/// # Errors
///
/// Returns [`TrackerError::ShootNotFound`] if the shoot does not exist.
#[utoipa::path(
    post,
    path = "/api/shoots/{id}/move-to-edited",
    tag = "Shoots",
    summary = "Move a shoot to the edited bucket",
    description = "Removes the shoot from the pending bucket and records it as an edited shoot under a new id.",
    params(
        ("id" = String, Path, description = "Shoot UUID"),
    ),
    responses(
        (status = 201, description = "Edited shoot created", body = EditedShoot),
        (status = 404, description = "Shoot not found", body = ErrorResponse),
    )
)]
pub async fn move_to_edited(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TrackerError> {
    let id = parse_shoot_id(&id)?;
    let edited = state.shoot_service.move_to_edited(id).await?;
    Ok((StatusCode::CREATED, Json(edited)))
}

/// Pending-bucket routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shoots", get(list_shoots).post(create_shoot))
        .route(
            "/shoots/{id}",
            get(get_shoot).put(update_shoot).delete(delete_shoot),
        )
        .route("/shoots/{id}/move-to-edited", post(move_to_edited))
}

/// An id that is not a UUID cannot name a stored shoot.
fn parse_shoot_id(raw: &str) -> Result<ShootId, TrackerError> {
    raw.parse()
        .map_err(|_| TrackerError::ShootNotFound(raw.to_string()))
}
