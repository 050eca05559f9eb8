use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use resume_contract::{PutResumeRequest, PutResumeResponse, ResumeResponse};
use tracing::debug;

use crate::errors::AppError;
use crate::state::AppState;
use crate::store::stamp_now;

/// GET /api/resume/:id
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeResponse>, AppError> {
    check_id(&id)?;
    let row = state.store.find(&id).await?.ok_or(AppError::NotFound)?;
    Ok(Json(ResumeResponse {
        data: row.data,
        updated_at: Some(row.updated_at),
    }))
}

/// PUT /api/resume/:id
///
/// Upserts the whole document. A body that is not JSON, or whose `data` is
/// not an object, is rejected before storage is touched. Bodies over the
/// router's limit get 413.
pub async fn handle_put_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PutResumeRequest>, JsonRejection>,
) -> Result<Json<PutResumeResponse>, AppError> {
    check_id(&id)?;
    let Json(req) = body.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge
        } else {
            AppError::InvalidInput(e.body_text())
        }
    })?;
    if !req.data.is_object() {
        return Err(AppError::InvalidInput(format!(
            "expected an object, got {}",
            json_kind(&req.data)
        )));
    }

    let updated_at = state.store.upsert(&id, req.data, stamp_now()).await?;
    debug!("Saved resume {id} at {updated_at}");

    Ok(Json(PutResumeResponse {
        ok: true,
        updated_at,
    }))
}

/// Postgres text cannot hold NUL, so such ids could never be stored or found.
fn check_id(id: &str) -> Result<(), AppError> {
    if id.contains('\0') {
        return Err(AppError::InvalidId);
    }
    Ok(())
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
