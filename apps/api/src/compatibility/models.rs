use serde::{Deserialize, Serialize};

pub const NOT_SPECIFIED: &str = "Not specified";
pub const NO_ALTERNATIVES: &str = "No alternatives suggested";

/// A validated compatibility check request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityRequest {
    /// Currently prescribed medicines, in the order the caller sent them.
    pub medicines_list: Vec<String>,
    pub new_medicine: String,
}

/// Model output after shape validation and defaulting. Every field is defined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedResult {
    pub compatible: bool,
    pub conflicting_medicine: String,
    pub complication: String,
    pub alternatives: Vec<String>,
    pub error_not_a_medicine: Option<String>,
}

/// Caller-facing response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResponse {
    pub compatible: bool,
    pub conflicting_medicine: String,
    pub complication: String,
    pub alternatives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_not_a_medicine: Option<String>,
}

impl From<NormalizedResult> for CompatibilityResponse {
    fn from(result: NormalizedResult) -> Self {
        CompatibilityResponse {
            compatible: result.compatible,
            conflicting_medicine: result.conflicting_medicine,
            complication: result.complication,
            alternatives: result.alternatives,
            error_not_a_medicine: result.error_not_a_medicine,
        }
    }
}
