use axum::{extract::State, Json};
use resume_contract::{HealthResponse, PingResponse};

use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/health
/// Liveness only; never touches storage.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// GET /api/pingdb
pub async fn ping_handler(State(state): State<AppState>) -> Result<Json<PingResponse>, AppError> {
    let ping = state.store.ping().await.map_err(AppError::PingFailed)?;
    Ok(Json(PingResponse { ok: true, ping }))
}
