pub mod dynamodb;
pub mod postgres;

use async_trait::async_trait;

use crate::models::Submission;

pub use dynamodb::DynamoDbStore;
pub use postgres::PgStore;

#[derive(Debug)]
pub struct StoreError {
    pub message: String,
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for StoreError {
    fn from(s: String) -> Self {
        StoreError { message: s }
    }
}

impl From<&str> for StoreError {
    fn from(s: &str) -> Self {
        StoreError {
            message: s.to_string(),
        }
    }
}

/// Durable record store. Writes exactly one item per call, keyed by
/// `submission_id`; no conditional write, no retry.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn put(&self, submission: &Submission) -> Result<(), StoreError>;
}
