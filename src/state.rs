use std::sync::Arc;

use crate::submission::SubmissionHandler;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub handler: SubmissionHandler,
}
