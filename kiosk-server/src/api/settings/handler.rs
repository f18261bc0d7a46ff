use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::core::ServerState;
use crate::settings::Settings;
use crate::utils::{AppResponse, AppResult};

/// GET /api/settings
pub async fn get(State(state): State<ServerState>) -> Json<Settings> {
    Json(state.settings.snapshot())
}

/// POST /api/settings - replace the whole record
pub async fn update(
    State(state): State<ServerState>,
    payload: Result<Json<Settings>, JsonRejection>,
) -> AppResult<Json<AppResponse<()>>> {
    let Json(settings) = payload?;
    state.settings.replace(settings).await?;
    Ok(Json(AppResponse::ok()))
}
