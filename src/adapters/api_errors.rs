use crate::domain::error::AuditError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// Newtype so the domain error can be returned straight from axum handlers.
pub struct ApiError(pub AuditError);

impl From<AuditError> for ApiError {
    fn from(err: AuditError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self.0 {
            AuditError::Validation(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "validation_error",
                msg.clone(),
            ),
            AuditError::Upstream { status, .. } => {
                tracing::warn!(upstream_status = status, "document API rejected request");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_error",
                    self.0.user_message(),
                )
            }
            AuditError::Http(err) => {
                tracing::error!("document API unreachable: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_error",
                    self.0.user_message(),
                )
            }
            AuditError::Serialization(err) => {
                tracing::error!("unexpected document API payload: {err}");
                (
                    StatusCode::BAD_GATEWAY,
                    "upstream_error",
                    self.0.user_message(),
                )
            }
            AuditError::Config(err) => {
                tracing::error!("configuration error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "internal error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error_code": error_code,
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}
