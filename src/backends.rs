use std::sync::Arc;

use aws_config::{BehaviorVersion, SdkConfig};
use sqlx::postgres::PgPoolOptions;
use tokio::sync::OnceCell;

use crate::config::{Config, MailBackend, StoreBackend};
use crate::email::{Mailer, SesMailer, SmtpMailer};
use crate::store::{DynamoDbStore, PgStore, SubmissionStore};

/// Build the store and mail clients selected by the configuration. AWS
/// credentials are only resolved when an AWS backend is in use.
pub async fn connect(
    config: &Config,
) -> Result<(Arc<dyn SubmissionStore>, Arc<dyn Mailer>), String> {
    let aws: OnceCell<SdkConfig> = OnceCell::new();
    let load_aws = || aws_config::load_defaults(BehaviorVersion::latest());

    let store: Arc<dyn SubmissionStore> = match &config.store {
        StoreBackend::DynamoDb => {
            let sdk = aws.get_or_init(load_aws).await;
            tracing::info!(table = %config.table_name, "Using DynamoDB store");
            Arc::new(DynamoDbStore::new(
                aws_sdk_dynamodb::Client::new(sdk),
                &config.table_name,
            ))
        }
        StoreBackend::Postgres { database_url } => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await
                .map_err(|e| format!("Failed to connect to database: {e}"))?;
            tracing::info!(table = %config.table_name, "Using Postgres store");
            Arc::new(PgStore::new(pool, &config.table_name))
        }
    };

    let mailer: Arc<dyn Mailer> = match &config.mail {
        MailBackend::Ses => {
            let sdk = aws.get_or_init(load_aws).await;
            tracing::info!("Using SES mailer");
            Arc::new(SesMailer::new(aws_sdk_sesv2::Client::new(sdk)))
        }
        MailBackend::Smtp(smtp) => {
            tracing::info!(host = %smtp.host, port = smtp.port, "Using SMTP mailer");
            Arc::new(SmtpMailer::new(smtp)?)
        }
    };

    Ok((store, mailer))
}
