//! Edited-bucket handlers: read, update, delete, and move back.

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

/// `GET /edited-shoots` — List edited shoots.
///
/// # Errors
///
/// Returns [`TrackerError`] on persistence failures.
#[utoipa::path(
    get,
    path = "/api/edited-shoots",
    tag = "Edited Shoots",
    summary = "List edited shoots",
    responses(
        (status = 200, description = "Edited shoots", body = Vec<EditedShoot>),
    )
)]
pub async fn list_edited(State(state): State<AppState>) -> Result<impl IntoResponse, TrackerError> {
    Ok(Json(state.shoot_service.list_edited().await?))
}

/// `GET /edited-shoots/:id` — Get one edited shoot.
///
/// # Errors
///
/// Returns [`TrackerError::EditedShootNotFound`] if it does not exist.
#[utoipa::path(
    get,
    path = "/api/edited-shoots/{id}",
    tag = "Edited Shoots",
    summary = "Get an edited shoot",
    params(
        ("id" = String, Path, description = "Edited shoot UUID"),
    ),
    responses(
        (status = 200, description = "Edited shoot", body = EditedShoot),
        (status = 404, description = "Edited shoot not found", body = ErrorResponse),
    )
)]
pub async fn get_edited(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TrackerError> {
    let id = parse_edited_id(&id)?;
    Ok(Json(state.shoot_service.get_edited(id).await?))
}

/// `PUT /edited-shoots/:id` — Replace the fields of an edited shoot.
///
/// # Errors
///
/// Returns [`TrackerError::InvalidRequest`] on bad fields or
/// [`TrackerError::EditedShootNotFound`] if it does not exist.
#[utoipa::path(
    put,
    path = "/api/edited-shoots/{id}",
    tag = "Edited Shoots",
    summary = "Update an edited shoot",
    params(
        ("id" = String, Path, description = "Edited shoot UUID"),
    ),
    request_body = ShootRequest,
    responses(
        (status = 200, description = "Edited shoot updated", body = EditedShoot),
        (status = 400, description = "Missing or invalid field", body = ErrorResponse),
        (status = 404, description = "Edited shoot not found", body = ErrorResponse),
    )
)]
pub async fn update_edited(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ShootRequest>, JsonRejection>,
) -> Result<impl IntoResponse, TrackerError> {
    let Json(req) = payload?;
    let fields = req.into_fields()?;
    let id = parse_edited_id(&id)?;
    Ok(Json(state.shoot_service.update_edited(id, fields).await?))
}

/// `POST /edited-shoots/:id/move-back` — Return a shoot to the pending bucket.
///
/// # Errors
///
/// Returns [`TrackerError::EditedShootNotFound`] if it does not exist.
#[utoipa::path(
    post,
    path = "/api/edited-shoots/{id}/move-back",
    tag = "Edited Shoots",
    summary = "Move an edited shoot back to pending",
    description = "Removes the edited shoot and records it as a pending shoot under a new id.",
    params(
        ("id" = String, Path, description = "Edited shoot UUID"),
    ),
    responses(
        (status = 201, description = "Pending shoot created", body = Shoot),
        (status = 404, description = "Edited shoot not found", body = ErrorResponse),
    )
)]
pub async fn move_back(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TrackerError> {
    let id = parse_edited_id(&id)?;
    let shoot = state.shoot_service.move_back_to_pending(id).await?;
    Ok((StatusCode::CREATED, Json(shoot)))
}

/// `DELETE /edited-shoots/:id` — Delete an edited shoot.
///
/// # Errors
///
/// Returns [`TrackerError::EditedShootNotFound`] if it does not exist.
#[utoipa::path(
    delete,
    path = "/api/edited-shoots/{id}",
    tag = "Edited Shoots",
    summary = "Delete an edited shoot",
    params(
        ("id" = String, Path, description = "Edited shoot UUID"),
    ),
    responses(
        (status = 200, description = "Edited shoot deleted", body = MessageResponse),
        (status = 404, description = "Edited shoot not found", body = ErrorResponse),
    )
)]
pub async fn delete_edited(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, TrackerError> {
    let id = parse_edited_id(&id)?;
    state.shoot_service.delete_edited(id).await?;
    Ok(Json(MessageResponse::new("Edited shoot deleted successfully")))
}

/// Edited-bucket routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/edited-shoots", get(list_edited))
        .route(
            "/edited-shoots/{id}",
            get(get_edited).put(update_edited).delete(delete_edited),
        )
        .route("/edited-shoots/{id}/move-back", post(move_back))
}

fn parse_edited_id(raw: &str) -> Result<ShootId, TrackerError> {
    raw.parse()
        .map_err(|_| TrackerError::EditedShootNotFound(raw.to_string()))
}
