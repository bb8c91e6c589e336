use async_trait::async_trait;
use tracing::info;

use super::{MailError, MailTransport, OutgoingMail};

/// Transport used when SMTP is not configured: the message is written to
/// the log and counted as delivered.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTransport;

#[async_trait]
impl MailTransport for LogTransport {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        info!(to = %mail.to, subject = %mail.subject, body_len = mail.body.len(), "mail_logged_not_sent");
        Ok(())
    }
}
