//! Wire contract shared by the resume API server and its clients.
//!
//! Field names follow the JSON the browser frontend already speaks
//! (`updatedAt`, `ok`, `error`), so every type here is camelCase on the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Prefix every route is mounted under.
pub const API_PREFIX: &str = "/api";
pub const HEALTH_PATH: &str = "/health";
pub const PING_PATH: &str = "/pingdb";
/// Resume documents live at `{API_PREFIX}{RESUME_PATH}/{id}`.
pub const RESUME_PATH: &str = "/resume";

pub const NOT_FOUND_MESSAGE: &str = "Not found";
pub const INVALID_DATA_MESSAGE: &str = "Invalid data";
pub const INVALID_ID_MESSAGE: &str = "Invalid id";
pub const PAYLOAD_TOO_LARGE_MESSAGE: &str = "Payload too large";
pub const SERVER_ERROR_MESSAGE: &str = "Server error";
pub const PING_FAILED_MESSAGE: &str = "Storage ping failed";

/// GET /api/health
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

/// GET /api/pingdb
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingResponse {
    pub ok: bool,
    pub ping: bool,
}

/// Failure body for /api/pingdb. Unlike the other routes it carries `ok: false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PingFailure {
    pub ok: bool,
    pub error: String,
}

/// Failure body for the resume routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// GET /api/resume/:id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeResponse {
    #[serde(default)]
    pub data: Value,
    pub updated_at: Option<DateTime<Utc>>,
}

/// PUT /api/resume/:id request body.
///
/// `data` defaults to `null` when the field is missing so the server can
/// reject it with the same message as an explicit `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PutResumeRequest {
    #[serde(default)]
    pub data: Value,
}

/// PUT /api/resume/:id success body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutResumeResponse {
    pub ok: bool,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_put_response_uses_camel_case_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let body = serde_json::to_value(PutResumeResponse {
            ok: true,
            updated_at: at,
        })
        .unwrap();
        assert_eq!(body["ok"], json!(true));
        assert_eq!(body["updatedAt"], json!("2024-05-01T12:00:00Z"));
        assert!(body.get("updated_at").is_none());
    }

    #[test]
    fn test_put_request_missing_data_is_null() {
        let req: PutResumeRequest = serde_json::from_str("{}").unwrap();
        assert!(req.data.is_null());
    }

    #[test]
    fn test_resume_response_tolerates_null_fields() {
        let res: ResumeResponse =
            serde_json::from_str(r#"{"data":null,"updatedAt":null}"#).unwrap();
        assert!(res.data.is_null());
        assert!(res.updated_at.is_none());
    }
}
