//! Axum route handlers for the compatibility API.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::compatibility::checker::check_compatibility;
use crate::compatibility::models::CompatibilityResponse;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /check-compatibility
///
/// The body is taken as a generic value so that missing or mistyped fields
/// surface as `MissingField`. An unparseable body is reported the same way.
pub async fn handle_check_compatibility(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CompatibilityResponse>, AppError> {
    let Json(body) = body.map_err(|rejection| {
        AppError::MissingField(format!(
            "Request body must be a JSON object: {}",
            rejection.body_text()
        ))
    })?;
    let response = check_compatibility(&body, state.llm.as_ref()).await?;
    Ok(Json(response))
}
