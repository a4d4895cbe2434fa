use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every kind is terminal for the request. Provider and parse details are
/// logged here and never echoed to the caller.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Inference unavailable: {0}")]
    InferenceUnavailable(#[from] LlmError),

    #[error("Malformed model output: {reason}")]
    MalformedOutput { reason: String, raw: String },

    #[error("Unexpected model output shape: {reason}")]
    UnexpectedShape { reason: String, raw: String },
}

impl AppError {
    /// Stable machine-readable kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::MissingField(_) => "MISSING_FIELD",
            AppError::InferenceUnavailable(_) => "INFERENCE_UNAVAILABLE",
            AppError::MalformedOutput { .. } => "MALFORMED_OUTPUT",
            AppError::UnexpectedShape { .. } => "UNEXPECTED_SHAPE",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let (status, message) = match &self {
            AppError::MissingField(msg) => {
                tracing::warn!(kind, "Rejected request: {msg}");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::InferenceUnavailable(e) => {
                tracing::error!(kind, "Inference provider error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to check compatibility".to_string(),
                )
            }
            AppError::MalformedOutput { reason, raw } => {
                tracing::error!(kind, raw = %raw, "Model output is not JSON: {reason}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Failed to parse response from the model".to_string(),
                )
            }
            AppError::UnexpectedShape { reason, raw } => {
                tracing::error!(kind, raw = %raw, "Model output has wrong shape: {reason}");
                (
                    StatusCode::BAD_GATEWAY,
                    "Unexpected response format from the model".to_string(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request_with_message() {
        let response = AppError::MissingField("newMedicine is missing".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            json!({ "error": "newMedicine is missing" })
        );
    }

    #[tokio::test]
    async fn test_malformed_output_hides_raw_text() {
        let response = AppError::MalformedOutput {
            reason: "expected value at line 1 column 1".to_string(),
            raw: "Sorry, I cannot help with that.".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let body = body_of(response).await;
        assert_eq!(body["error"], "Failed to parse response from the model");
        assert!(!body.to_string().contains("Sorry"));
    }

    #[tokio::test]
    async fn test_kinds_produce_distinct_messages() {
        let malformed = AppError::MalformedOutput {
            reason: String::new(),
            raw: String::new(),
        };
        let shape = AppError::UnexpectedShape {
            reason: String::new(),
            raw: String::new(),
        };
        let unavailable = AppError::InferenceUnavailable(LlmError::EmptyContent);

        let a = body_of(malformed.into_response()).await;
        let b = body_of(shape.into_response()).await;
        let c = body_of(unavailable.into_response()).await;
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[tokio::test]
    async fn test_every_kind_maps_to_client_or_gateway_status() {
        let cases = [
            (AppError::MissingField("x".to_string()), StatusCode::BAD_REQUEST),
            (
                AppError::InferenceUnavailable(LlmError::EmptyContent),
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::MalformedOutput {
                    reason: String::new(),
                    raw: String::new(),
                },
                StatusCode::BAD_GATEWAY,
            ),
            (
                AppError::UnexpectedShape {
                    reason: String::new(),
                    raw: String::new(),
                },
                StatusCode::BAD_GATEWAY,
            ),
        ];
        for (error, expected) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected);
            assert!(body_of(response).await["error"].is_string());
        }
    }
}
