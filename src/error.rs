use crate::email::MailError;
use crate::store::StoreError;
use crate::submission::ContactResponse;

/// Failure of one step of the submission pipeline.
#[derive(Debug)]
pub enum SubmissionError {
    Parse(String),
    Validation(Vec<&'static str>),
    Store(StoreError),
    Notify(MailError),
}

impl SubmissionError {
    pub fn step(&self) -> &'static str {
        match self {
            SubmissionError::Parse(_) => "parse",
            SubmissionError::Validation(_) => "validate",
            SubmissionError::Store(_) => "store",
            SubmissionError::Notify(_) => "notify",
        }
    }
}

impl std::fmt::Display for SubmissionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionError::Parse(msg) => write!(f, "Parse Error: {msg}"),
            SubmissionError::Validation(missing) => {
                write!(f, "Validation Error: missing {}", missing.join(", "))
            }
            SubmissionError::Store(err) => write!(f, "Store Error: {err}"),
            SubmissionError::Notify(err) => write!(f, "Notification Error: {err}"),
        }
    }
}

impl std::error::Error for SubmissionError {}

impl From<StoreError> for SubmissionError {
    fn from(err: StoreError) -> Self {
        SubmissionError::Store(err)
    }
}

impl From<MailError> for SubmissionError {
    fn from(err: MailError) -> Self {
        SubmissionError::Notify(err)
    }
}

/// Collapse a step failure into the caller-visible response. Only
/// validation is distinguishable; every other failure is logged and
/// reported as a generic internal error.
impl From<SubmissionError> for ContactResponse {
    fn from(err: SubmissionError) -> Self {
        match &err {
            SubmissionError::Validation(missing) => {
                tracing::info!(missing = ?missing, "Rejected submission with missing fields");
                ContactResponse::missing_fields()
            }
            _ => {
                tracing::error!(step = err.step(), "Error processing submission: {err}");
                ContactResponse::internal_error()
            }
        }
    }
}
