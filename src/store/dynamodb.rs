use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::AttributeValue;

use super::{StoreError, SubmissionStore};
use crate::models::Submission;

pub struct DynamoDbStore {
    client: aws_sdk_dynamodb::Client,
    table: String,
}

impl DynamoDbStore {
    pub fn new(client: aws_sdk_dynamodb::Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }
}

#[async_trait]
impl SubmissionStore for DynamoDbStore {
    async fn put(&self, submission: &Submission) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table)
            .item(
                "submissionId",
                AttributeValue::S(submission.submission_id.to_string()),
            )
            .item("name", AttributeValue::S(submission.name.clone()))
            .item("email", AttributeValue::S(submission.email.clone()))
            .item("message", AttributeValue::S(submission.message.clone()))
            .item("submittedAt", AttributeValue::S(submission.submitted_at_iso()))
            .send()
            .await
            .map_err(|e| {
                StoreError::from(format!(
                    "DynamoDB put_item on {} failed: {}",
                    self.table,
                    DisplayErrorContext(&e)
                ))
            })?;

        Ok(())
    }
}
