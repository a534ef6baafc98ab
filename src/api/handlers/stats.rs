//! Earnings statistics handler.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::StatsQuery;
use crate::app_state::AppState;
use crate::domain::MonthlyStats;
use crate::error::{ErrorResponse, TrackerError};

/// `GET /stats/monthly` — Earnings per calendar month, newest first.
///
/// # Errors
///
/// Returns [`TrackerError`] on persistence failures.
#[utoipa::path(
    get,
    path = "/api/stats/monthly",
    tag = "Statistics",
    summary = "Monthly earnings",
    description = "Groups bookings by the year and month of their date, counting them and summing their prices. Pending bookings only unless `scope` says otherwise. Sorted newest month first.",
    params(StatsQuery),
    responses(
        (status = 200, description = "Per-month totals", body = Vec<MonthlyStats>),
        (status = 400, description = "Unknown scope", body = ErrorResponse),
    )
)]
pub async fn monthly_stats(
    State(state): State<AppState>,
    query: Result<Query<StatsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, TrackerError> {
    let Query(query) = query?;
    Ok(Json(state.shoot_service.monthly_stats(query.scope).await?))
}

/// Statistics routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats/monthly", get(monthly_stats))
}
