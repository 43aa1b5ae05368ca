use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreError, SubmissionStore};
use crate::models::Submission;

/// Postgres-backed store. The target table is provisioned outside this
/// service with columns `submission_id uuid primary key, name text,
/// email text, message text, submitted_at timestamp`.
pub struct PgStore {
    pool: PgPool,
    insert_sql: String,
}

impl PgStore {
    /// `table` must already have passed `config::validate_table_identifier`.
    pub fn new(pool: PgPool, table: &str) -> Self {
        Self {
            pool,
            insert_sql: format!(
                "INSERT INTO {table} (submission_id, name, email, message, submitted_at)
                 VALUES ($1, $2, $3, $4, $5)"
            ),
        }
    }
}

#[async_trait]
impl SubmissionStore for PgStore {
    async fn put(&self, submission: &Submission) -> Result<(), StoreError> {
        sqlx::query(&self.insert_sql)
            .bind(submission.submission_id)
            .bind(&submission.name)
            .bind(&submission.email)
            .bind(&submission.message)
            .bind(submission.submitted_at)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::from(format!("Failed to store submission: {e}")))?;

        Ok(())
    }
}
