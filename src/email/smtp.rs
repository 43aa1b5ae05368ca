use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use super::{MailError, Mailer, OutboundEmail};
use crate::config::{SmtpConfig, SmtpTls};

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = match config.tls {
            SmtpTls::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| format!("SMTP relay error: {e}"))?
                .port(config.port)
                .credentials(creds)
                .build(),
            SmtpTls::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.host)
                .port(config.port)
                .credentials(creds)
                .build(),
            SmtpTls::Starttls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| format!("SMTP starttls error: {e}"))?
                .port(config.port)
                .credentials(creds)
                .build(),
        };

        Ok(Self { transport })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        let mut builder = Message::builder()
            .from(
                email
                    .from
                    .parse()
                    .map_err(|e| MailError::from(format!("Invalid from address: {e}")))?,
            )
            .subject(email.subject.as_str());

        for to in &email.to {
            builder = builder.to(to
                .parse()
                .map_err(|e| MailError::from(format!("Invalid to address: {e}")))?);
        }

        let message = builder
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| MailError::from(format!("Failed to build email: {e}")))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| MailError::from(format!("Failed to send email: {e}")))?;

        Ok(())
    }
}
