pub mod backends;
pub mod config;
pub mod email;
pub mod error;
pub mod lambda;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod submission;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::email::Mailer;
use crate::state::{AppState, SharedState};
use crate::store::SubmissionStore;
use crate::submission::SubmissionHandler;

pub fn build_app(
    config: &Config,
    store: Arc<dyn SubmissionStore>,
    mailer: Arc<dyn Mailer>,
) -> Router {
    let handler = SubmissionHandler::new(store, mailer, config.notification.clone());
    let state: SharedState = Arc::new(AppState { handler });

    routes::contact_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(config.max_body_size)),
        )
        .with_state(state)
}
