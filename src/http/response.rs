//! Outcome classification and body normalization.

use serde_json::Value;

use crate::error::HttpError;

/// Success value of a dispatched request.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseValue {
    /// The parsed response body. An empty body is `Value::Null`.
    Json(Value),
    /// Caller-supplied literal that replaced the body.
    Literal(String),
}

impl ResponseValue {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            Self::Literal(_) => None,
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Self::Literal(s) => Some(s),
            Self::Json(_) => None,
        }
    }

    /// Collapse into JSON; a literal becomes a JSON string.
    pub fn into_json(self) -> Value {
        match self {
            Self::Json(v) => v,
            Self::Literal(s) => Value::String(s),
        }
    }
}

/// Classify a received response.
///
/// Any status whose leading digit is not `2` is a failure carrying the raw
/// body. A 2xx body is always parsed as JSON first, so a malformed body fails
/// even when `success_literal` is supplied. After a successful parse a
/// non-empty literal replaces the value; an empty literal is ignored.
pub fn classify(
    status: u16,
    body: String,
    success_literal: Option<&str>,
) -> Result<ResponseValue, HttpError> {
    if !(200..300).contains(&status) {
        return Err(HttpError::Api { status, body });
    }

    let value = if body.trim().is_empty() {
        Value::Null
    } else {
        match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(source) => return Err(HttpError::Parse { source, body }),
        }
    };

    match success_literal.filter(|literal| !literal.is_empty()) {
        Some(literal) => Ok(ResponseValue::Literal(literal.to_string())),
        None => Ok(ResponseValue::Json(value)),
    }
}
