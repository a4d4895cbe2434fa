//! Response normalizer: turns untrusted model text into a `NormalizedResult`.
//!
//! Two phases:
//! 1. Syntactic: strip code fences, parse into a generic `serde_json::Value`.
//! 2. Shape: require a boolean `compatible`, default the named optional fields.
//!
//! Only `compatible` is strict. Optional fields that are absent, null, empty or
//! of the wrong type fall back to their sentinels; nothing is coerced.

use serde_json::{Map, Value};

use crate::compatibility::models::{NormalizedResult, NOT_SPECIFIED, NO_ALTERNATIVES};
use crate::errors::AppError;

/// Key the prompt asks for, followed by the spelling older prompts used.
const NOT_A_MEDICINE_KEYS: &[&str] = &["errorNotAMedicine", "errorNotamedicine"];

pub fn normalize_response(raw: &str) -> Result<NormalizedResult, AppError> {
    let payload = strip_code_fences(raw);

    let value: Value = serde_json::from_str(payload).map_err(|e| AppError::MalformedOutput {
        reason: e.to_string(),
        raw: raw.to_string(),
    })?;

    let object = value.as_object().ok_or_else(|| AppError::UnexpectedShape {
        reason: "top-level value is not an object".to_string(),
        raw: raw.to_string(),
    })?;

    let compatible = match object.get("compatible") {
        Some(Value::Bool(flag)) => *flag,
        Some(other) => {
            return Err(AppError::UnexpectedShape {
                reason: format!("`compatible` is not a boolean: {other}"),
                raw: raw.to_string(),
            })
        }
        None => {
            return Err(AppError::UnexpectedShape {
                reason: "`compatible` is missing".to_string(),
                raw: raw.to_string(),
            })
        }
    };

    Ok(NormalizedResult {
        compatible,
        conflicting_medicine: string_or_sentinel(object, "conflictingMedicine"),
        complication: string_or_sentinel(object, "complication"),
        alternatives: alternatives_or_sentinel(object),
        error_not_a_medicine: NOT_A_MEDICINE_KEYS
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str))
            .map(str::to_string),
    })
}

/// Strips ```json ... ``` or ``` ... ``` fences from model output.
/// Leading and trailing fences are removed independently; any language tag
/// directly after the opening fence goes with it.
pub fn strip_code_fences(text: &str) -> &str {
    let mut text = text.trim();
    if let Some(rest) = text.strip_prefix("```") {
        text = rest
            .trim_start()
            .trim_start_matches(|c: char| c.is_ascii_alphanumeric() || c == '-' || c == '_')
            .trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }
    text
}

fn string_or_sentinel(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key).and_then(Value::as_str) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => NOT_SPECIFIED.to_string(),
    }
}

fn alternatives_or_sentinel(object: &Map<String, Value>) -> Vec<String> {
    object
        .get("alternatives")
        .and_then(Value::as_array)
        .and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        })
        .unwrap_or_else(|| vec![NO_ALTERNATIVES.to_string()])
}
