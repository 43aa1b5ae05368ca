use axum::body::Bytes;
use axum::extract::State;
use axum::extract::rejection::BytesRejection;
use axum::http::{HeaderValue, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::SharedState;
use crate::submission::ContactResponse;
use crate::submission::response::RESPONSE_HEADERS;

/// Accepts a submission on any path and method; `OPTIONS` is answered as
/// a CORS preflight.
pub async fn submit(
    State(state): State<SharedState>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    if method == Method::OPTIONS {
        return preflight();
    }

    let body = match body {
        Ok(body) => body,
        Err(e) => {
            tracing::error!(step = "parse", "Failed to read request body: {e}");
            return ContactResponse::internal_error().into_response();
        }
    };

    let body = (!body.is_empty()).then_some(body.as_ref());
    state.handler.handle(body).await.into_response()
}

fn preflight() -> Response {
    let mut response = (
        [
            ("access-control-allow-methods", "POST, OPTIONS"),
            ("access-control-max-age", "86400"),
        ],
        StatusCode::NO_CONTENT,
    )
        .into_response();

    for (name, value) in RESPONSE_HEADERS {
        response
            .headers_mut()
            .insert(name, HeaderValue::from_static(value));
    }
    response
}
