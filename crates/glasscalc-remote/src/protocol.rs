//! Wire types for the evaluation service
//!
//! ```text
//! POST /calculate           {"expression": "5+3", "calculator_type": 1}
//! POST /calculate_function  {"function": "sqrt", "value": "16", "calculator_type": 2}
//!   2xx      -> {"result": 8}
//!   non-2xx  -> {"error": "division by zero"}
//! GET  /health              {"status": "healthy"}
//! ```

use glasscalc_core::prelude::*;
use glasscalc_core::{normalize_operators, CalcFunction, Mode};
use serde::{Deserialize, Serialize};

pub const CALCULATE_PATH: &str = "calculate";
pub const CALCULATE_FUNCTION_PATH: &str = "calculate_function";
pub const HEALTH_PATH: &str = "health";

/// Body of `POST /calculate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculateRequest {
    pub expression: String,
    pub calculator_type: u8,
}

impl CalculateRequest {
    /// Build a request, normalizing display glyphs to ASCII operators.
    pub fn new(expression: &str, mode: Mode) -> Self {
        Self {
            expression: normalize_operators(expression),
            calculator_type: mode.ordinal(),
        }
    }
}

/// Body of `POST /calculate_function`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionRequest {
    pub function: CalcFunction,
    pub value: String,
    pub calculator_type: u8,
}

impl FunctionRequest {
    pub fn new(function: CalcFunction, value: impl Into<String>, mode: Mode) -> Self {
        Self {
            function,
            value: value.into(),
            calculator_type: mode.ordinal(),
        }
    }
}

/// A decoded, well-formed reply
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceReply {
    /// 2xx with a numeric `result`
    Value(serde_json::Number),
    /// non-2xx with an optional `error` message
    Rejected(Option<String>),
}

#[derive(Debug, Deserialize)]
struct ReplyBody {
    #[serde(default)]
    result: Option<serde_json::Value>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// Decode a reply body given whether the HTTP status was a success.
///
/// Anything that is not JSON, and any success body without a numeric
/// `result`, is a protocol error rather than a service rejection.
pub fn decode_reply(success: bool, body: &str) -> Result<ServiceReply> {
    let reply: ReplyBody = serde_json::from_str(body)
        .map_err(|e| Error::protocol(format!("reply is not a JSON object: {}", e)))?;

    if success {
        match reply.result {
            Some(serde_json::Value::Number(n)) => Ok(ServiceReply::Value(n)),
            Some(other) => Err(Error::protocol(format!(
                "result is not a number: {}",
                other
            ))),
            None => Err(Error::protocol("reply has no result")),
        }
    } else {
        let message = match reply.error {
            Some(serde_json::Value::String(s)) => Some(s),
            Some(serde_json::Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        };
        Ok(ServiceReply::Rejected(message))
    }
}
