//! Decoding of the service's JSON replies.
//!
//! Shapes are deliberately loose: only the key an action needs is read and
//! everything else is ignored.

use serde::Deserialize;
use serde_json::{Number, Value};

use crate::error::ActionError;
use crate::transport::HttpResponse;

#[derive(Debug, Default, Deserialize)]
struct Reply {
    #[serde(default)]
    message: Option<Value>,
    #[serde(default)]
    total_errors: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    detail: Option<Value>,
}

fn as_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Turns a non-2xx response into `Status`, keeping a string `detail`/`error` if one was sent.
fn check_status(resp: &HttpResponse) -> Result<(), ActionError> {
    if resp.is_success() {
        return Ok(());
    }
    let detail = serde_json::from_slice::<Reply>(&resp.body)
        .ok()
        .and_then(|r| {
            r.detail
                .as_ref()
                .and_then(Value::as_str)
                .or_else(|| r.error.as_ref().and_then(Value::as_str))
                .map(str::to_string)
        });
    Err(ActionError::Status {
        status: resp.status,
        detail,
    })
}

fn decode(resp: &HttpResponse) -> Result<Reply, ActionError> {
    check_status(resp)?;
    let reply: Reply = serde_json::from_slice(&resp.body)?;
    if let Some(err) = reply.error.as_ref().and_then(as_text) {
        return Err(ActionError::Server(err));
    }
    Ok(reply)
}

/// The `message` of an upload or ping reply.
pub fn message(resp: &HttpResponse) -> Result<String, ActionError> {
    decode(resp)?
        .message
        .as_ref()
        .and_then(as_text)
        .ok_or(ActionError::MissingField("message"))
}

/// The `total_errors` count of a validate reply.
pub fn total_errors(resp: &HttpResponse) -> Result<Number, ActionError> {
    match decode(resp)?.total_errors {
        Some(Value::Number(n)) => Ok(n),
        _ => Err(ActionError::MissingField("total_errors")),
    }
}

/// The `error` text of a JSON body, if it is one.
pub fn error_text(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<Reply>(body)
        .ok()
        .and_then(|r| r.error.as_ref().and_then(as_text))
}

/// Text written to the result display after validation.
/// Integral floats print without a fraction (`3.0` shows as `3`).
pub fn errors_found_text(total: &Number) -> String {
    match total.as_f64() {
        Some(f) if !total.is_i64() && !total.is_u64() && f.fract() == 0.0 && f.abs() < 1e15 => {
            format!("Errors found: {}", f as i64)
        }
        _ => format!("Errors found: {total}"),
    }
}
