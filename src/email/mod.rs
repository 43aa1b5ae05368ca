pub mod ses;
pub mod smtp;
pub mod templates;

use async_trait::async_trait;

pub use ses::SesMailer;
pub use smtp::SmtpMailer;

/// A plain-text message ready for dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub body: String,
}

#[derive(Debug)]
pub struct MailError {
    pub message: String,
}

impl std::fmt::Display for MailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl From<String> for MailError {
    fn from(s: String) -> Self {
        MailError { message: s }
    }
}

impl From<&str> for MailError {
    fn from(s: &str) -> Self {
        MailError {
            message: s.to_string(),
        }
    }
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError>;
}
