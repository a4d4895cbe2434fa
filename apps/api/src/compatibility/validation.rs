use serde_json::Value;

use crate::compatibility::models::CompatibilityRequest;
use crate::errors::AppError;

/// Validates a raw request body into a `CompatibilityRequest`.
///
/// REJECTS with `MissingField`:
/// - body that is not a JSON object
/// - `medicinesList` absent, null, not an array, or holding a non-string / blank entry
/// - `newMedicine` absent, null, not a string, or blank
///
/// An empty `medicinesList` is accepted.
pub fn validate_request(body: &Value) -> Result<CompatibilityRequest, AppError> {
    let body = body
        .as_object()
        .ok_or_else(|| missing("Request body must be a JSON object"))?;

    let medicines_list = match body.get("medicinesList") {
        None | Some(Value::Null) => return Err(missing("medicinesList is missing")),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item.as_str() {
                Some(name) if !name.trim().is_empty() => Ok(name.to_string()),
                _ => Err(missing("medicinesList must contain only medicine names")),
            })
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(missing("medicinesList must be an array of medicine names")),
    };

    let new_medicine = match body.get("newMedicine") {
        Some(Value::String(name)) if !name.trim().is_empty() => name.clone(),
        Some(Value::String(_)) | None | Some(Value::Null) => {
            return Err(missing("newMedicine is missing"))
        }
        Some(_) => return Err(missing("newMedicine must be a string")),
    };

    Ok(CompatibilityRequest {
        medicines_list,
        new_medicine,
    })
}

fn missing(message: &str) -> AppError {
    AppError::MissingField(message.to_string())
}
