//! Compatibility pipeline: validate → prompt → complete → normalize → map.
//! Each stage short-circuits on error; nothing after a failure runs.

use serde_json::Value;
use tracing::debug;

use crate::compatibility::models::CompatibilityResponse;
use crate::compatibility::normalizer::normalize_response;
use crate::compatibility::prompts::build_compatibility_prompt;
use crate::compatibility::validation::validate_request;
use crate::errors::AppError;
use crate::llm_client::InferenceClient;

pub async fn check_compatibility(
    body: &Value,
    llm: &dyn InferenceClient,
) -> Result<CompatibilityResponse, AppError> {
    let request = validate_request(body)?;

    debug!(
        current_count = request.medicines_list.len(),
        new_medicine = %request.new_medicine,
        "Checking medicine compatibility"
    );

    let prompt = build_compatibility_prompt(&request);
    let raw = llm.complete(&prompt).await?;
    debug!(raw = %raw, "Generated result");

    let result = normalize_response(&raw)?;
    Ok(CompatibilityResponse::from(result))
}
