use std::sync::Arc;

use crate::config::NotificationConfig;
use crate::email::{Mailer, templates};
use crate::error::SubmissionError;
use crate::models::Submission;
use crate::store::SubmissionStore;

use super::{ContactResponse, fields, parser};

/// Validates a contact-form body, stores one record, then sends one
/// notification. Steps run strictly in that order; nothing is retried and
/// a stored record is not rolled back when the notification fails.
#[derive(Clone)]
pub struct SubmissionHandler {
    store: Arc<dyn SubmissionStore>,
    mailer: Arc<dyn Mailer>,
    notification: NotificationConfig,
}

impl SubmissionHandler {
    pub fn new(
        store: Arc<dyn SubmissionStore>,
        mailer: Arc<dyn Mailer>,
        notification: NotificationConfig,
    ) -> Self {
        Self {
            store,
            mailer,
            notification,
        }
    }

    /// Run the pipeline and render the caller-visible response.
    pub async fn handle(&self, body: Option<&[u8]>) -> ContactResponse {
        match self.process(body).await {
            Ok(submission) => ContactResponse::accepted(submission.submission_id),
            Err(err) => err.into(),
        }
    }

    /// Run the pipeline, reporting which step failed.
    pub async fn process(&self, body: Option<&[u8]>) -> Result<Submission, SubmissionError> {
        tracing::info!(body_len = body.map_or(0, <[u8]>::len), "Received submission");

        let form = parser::parse_body(body).map_err(SubmissionError::Parse)?;
        let form = fields::validate(form).map_err(SubmissionError::Validation)?;
        let submission = Submission::new(form);

        self.store.put(&submission).await?;
        tracing::info!(submission_id = %submission.submission_id, "Stored submission");
        tracing::debug!(?submission, "Stored item");

        let email = templates::notification(&submission, &self.notification);
        self.mailer.send(&email).await?;
        tracing::info!(
            submission_id = %submission.submission_id,
            recipient = %self.notification.recipient,
            "Sent notification"
        );

        Ok(submission)
    }
}
