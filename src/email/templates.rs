use crate::config::NotificationConfig;
use crate::models::Submission;

use super::OutboundEmail;

pub fn render_subject(name: &str) -> String {
    format!("New Contact Form Submission from {name}")
}

pub fn render_body(submission: &Submission) -> String {
    format!(
        "You have received a new message from your website's contact form.\n\
         \n\
         Name: {name}\n\
         Email: {email}\n\
         Message:\n\
         {message}\n\
         \n\
         Submission ID: {id}\n",
        name = submission.name,
        email = submission.email,
        message = submission.message,
        id = submission.submission_id,
    )
}

/// Build the notification for a stored submission.
pub fn notification(submission: &Submission, config: &NotificationConfig) -> OutboundEmail {
    OutboundEmail {
        from: config.sender.clone(),
        to: vec![config.recipient.clone()],
        subject: render_subject(&submission.name),
        body: render_body(submission),
    }
}
