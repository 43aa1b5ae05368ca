use async_trait::async_trait;
use aws_sdk_sesv2::error::DisplayErrorContext;
use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};

use super::{MailError, Mailer, OutboundEmail};

pub struct SesMailer {
    client: aws_sdk_sesv2::Client,
}

impl SesMailer {
    pub fn new(client: aws_sdk_sesv2::Client) -> Self {
        Self { client }
    }
}

fn utf8_content(data: &str) -> Result<Content, MailError> {
    Content::builder()
        .data(data)
        .charset("UTF-8")
        .build()
        .map_err(|e| MailError::from(format!("Failed to build email content: {e}")))
}

#[async_trait]
impl Mailer for SesMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let destination = Destination::builder()
            .set_to_addresses(Some(email.to.clone()))
            .build();

        let message = Message::builder()
            .subject(utf8_content(&email.subject)?)
            .body(Body::builder().text(utf8_content(&email.body)?).build())
            .build();

        self.client
            .send_email()
            .from_email_address(&email.from)
            .destination(destination)
            .content(EmailContent::builder().simple(message).build())
            .send()
            .await
            .map_err(|e| {
                MailError::from(format!("SES send_email failed: {}", DisplayErrorContext(&e)))
            })?;

        Ok(())
    }
}
