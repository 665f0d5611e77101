// --- File: crates/policyhub_common/src/http.rs ---
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::error::{HttpStatusCode, PolicyHubError};

/// Extension trait for PolicyHubError to convert it to an Axum HTTP response.
pub trait IntoHttpResponse {
    /// Converts the error into an Axum HTTP response.
    fn into_http_response(self) -> Response;
}

impl IntoHttpResponse for PolicyHubError {
    fn into_http_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            error!("Request failed with {}: {}", status_code, self);
        }

        let body = match &self {
            PolicyHubError::TrialExpired { expiry_date } => json!({
                "error": self.to_string(),
                "trialExpired": true,
                "expiryDate": expiry_date,
            }),
            _ => json!({ "error": self.to_string() }),
        };

        (status_code, Json(body)).into_response()
    }
}

impl IntoResponse for PolicyHubError {
    fn into_response(self) -> Response {
        self.into_http_response()
    }
}

/// Turns an axum JSON body rejection into a 400 with the usual `{"error"}` body.
pub fn json_rejection(rejection: JsonRejection) -> PolicyHubError {
    PolicyHubError::ValidationError(rejection.body_text())
}
