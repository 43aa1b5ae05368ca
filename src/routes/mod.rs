pub mod contact;

use axum::Router;
use axum::routing::get;

use crate::state::SharedState;

pub fn contact_routes() -> Router<SharedState> {
    Router::new()
        .route("/health", get(health).fallback(contact::submit))
        .fallback(contact::submit)
}

async fn health() -> &'static str {
    "ok"
}
