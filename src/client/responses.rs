use super::{errors::Result, RepustateError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A decoded response body. Its shape depends on the API call.
pub type ApiResponse = Map<String, Value>;

/// One entry of the `errors` list returned with a failed call.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ErrorDetail {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub message: String,
}

/// Checks the `status` and `errors` fields of a decoded response.
///
/// Responses without either field count as a success, as some endpoints
/// never report a status.
pub fn check_result_for_errors(result: &ApiResponse) -> Result<()> {
    let errors = result.get("errors");

    let Some(status) = result.get("status") else {
        return match errors {
            None => Ok(()),
            Some(_) => Err(RepustateError::api("no status field, but errors present")),
        };
    };

    if status.as_str() == Some("OK") {
        return Ok(());
    }

    let Some(errors) = errors else {
        return Err(RepustateError::api("failed with no error detail"));
    };

    let details: Vec<ErrorDetail> = match serde_json::from_value(errors.clone()) {
        Ok(details) => details,
        Err(_) => {
            return Err(RepustateError::api(format!(
                "failed with unrecognised error detail: {errors}"
            )))
        }
    };

    let message = details
        .iter()
        .map(|detail| format!("{}: {}", detail.field, detail.message))
        .collect::<Vec<_>>()
        .join("; ");

    Err(RepustateError::Api { message, details })
}

/// Reads a finite number that the service may send either as a JSON number
/// or as a numeric string.
pub(crate) fn value_as_f64(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };

    number.filter(|number: &f64| number.is_finite())
}

pub(crate) fn value_as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn extract_score(result: &ApiResponse) -> Result<f64> {
    result
        .get("score")
        .and_then(value_as_f64)
        .ok_or_else(|| RepustateError::MissingField("score".to_string()))
}

pub(crate) fn extract_results(mut result: ApiResponse) -> Result<Vec<Value>> {
    match result.remove("results") {
        Some(Value::Array(results)) => Ok(results),
        _ => Err(RepustateError::MissingField("results".to_string())),
    }
}
