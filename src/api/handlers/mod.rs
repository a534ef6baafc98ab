//! REST endpoint handlers organized by resource.

pub mod edited_shoots;
pub mod shoots;
pub mod stats;
pub mod system;

use axum::Router;

use crate::app_state::AppState;

/// Composes all resource routes under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(shoots::routes())
        .merge(edited_shoots::routes())
        .merge(stats::routes())
}
