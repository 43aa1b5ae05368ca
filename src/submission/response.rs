use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use uuid::Uuid;

use super::fields::MISSING_FIELDS_MESSAGE;

pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred.";

/// Headers carried by every response, whatever the outcome.
pub const RESPONSE_HEADERS: [(&str, &str); 3] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-headers", "Content-Type"),
    ("content-type", "application/json"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct ContactResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl ContactResponse {
    pub fn accepted(submission_id: Uuid) -> Self {
        Self {
            status: StatusCode::OK,
            body: json!({
                "message": SUCCESS_MESSAGE,
                "submissionId": submission_id,
            }),
        }
    }

    pub fn missing_fields() -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: json!({ "error": MISSING_FIELDS_MESSAGE }),
        }
    }

    pub fn internal_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: json!({ "error": INTERNAL_ERROR_MESSAGE }),
        }
    }
}

impl IntoResponse for ContactResponse {
    fn into_response(self) -> Response {
        let mut response = (self.status, self.body.to_string()).into_response();
        let headers = response.headers_mut();
        for (name, value) in RESPONSE_HEADERS {
            headers.insert(
                HeaderName::from_static(name),
                HeaderValue::from_static(value),
            );
        }
        response
    }
}
