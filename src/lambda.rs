//! API Gateway proxy integration for running the handler on AWS Lambda.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value, json};

use crate::submission::response::RESPONSE_HEADERS;
use crate::submission::{ContactResponse, SubmissionHandler};

/// Pull the raw body out of a proxy event. A missing or `null` body is
/// absent; `isBase64Encoded` bodies are decoded.
pub fn request_body(event: &Value) -> Result<Option<Vec<u8>>, String> {
    let encoded = event
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    match event.get("body") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(body)) if encoded => STANDARD
            .decode(body)
            .map(Some)
            .map_err(|e| format!("Invalid base64 body: {e}")),
        Some(Value::String(body)) => Ok(Some(body.clone().into_bytes())),
        Some(other) => Err(format!("Unexpected body type: {other}")),
    }
}

/// Render a response in the proxy integration shape.
pub fn render(response: &ContactResponse) -> Value {
    let headers: Map<String, Value> = RESPONSE_HEADERS
        .iter()
        .map(|(name, value)| (name.to_string(), Value::String(value.to_string())))
        .collect();

    json!({
        "statusCode": response.status.as_u16(),
        "headers": headers,
        "body": response.body.to_string(),
    })
}

/// Handle one invocation. Never fails: every outcome is rendered.
pub async fn handle_event(handler: &SubmissionHandler, event: Value) -> Value {
    let response = match request_body(&event) {
        Ok(body) => handler.handle(body.as_deref()).await,
        Err(e) => {
            tracing::error!(step = "parse", "Failed to read event body: {e}");
            ContactResponse::internal_error()
        }
    };

    render(&response)
}
