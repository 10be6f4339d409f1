use serde_json::Value;

use crate::error::BotError;
use crate::models::ApiResponse;

/// Checks the decoded body has the documented shape.
pub fn validate(raw: Value) -> Result<ApiResponse, BotError> {
    let body = match raw {
        Value::Object(body) => body,
        other => {
            return Err(BotError::ShapeFailure(format!(
                "response is not an object (got {})",
                json_type(&other)
            )));
        }
    };

    match body.get("homeworks") {
        None => {
            return Err(BotError::ShapeFailure(
                "response has no \"homeworks\" key".to_string(),
            ));
        }
        Some(Value::Array(_)) => {}
        Some(other) => {
            return Err(BotError::ShapeFailure(format!(
                "\"homeworks\" is not a list (got {})",
                json_type(other)
            )));
        }
    }

    Ok(ApiResponse::from_validated(body))
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
