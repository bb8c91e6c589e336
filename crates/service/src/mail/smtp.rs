use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use super::{MailError, MailTransport, OutgoingMail};

/// STARTTLS SMTP relay.
pub struct SmtpTransport {
    inner: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpTransport {
    pub fn from_config(cfg: &configs::MailConfig) -> Result<Self, MailError> {
        let from: Mailbox = cfg
            .from
            .parse()
            .map_err(|e: lettre::address::AddressError| MailError::Config(format!("mail.from: {e}")))?;
        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&cfg.host)
            .map_err(|e| MailError::Config(e.to_string()))?
            .port(cfg.port)
            .timeout(Some(Duration::from_secs(cfg.timeout_secs)));
        if !cfg.username.is_empty() {
            builder = builder.credentials(Credentials::new(cfg.username.clone(), cfg.password.clone()));
        }
        Ok(Self { inner: builder.build(), from })
    }

    fn build_message(&self, mail: &OutgoingMail) -> Result<Message, MailError> {
        build_message(&self.from, mail)
    }
}

fn build_message(from: &Mailbox, mail: &OutgoingMail) -> Result<Message, MailError> {
    let to: Mailbox = mail
        .to
        .trim()
        .parse()
        .map_err(|e: lettre::address::AddressError| MailError::Address(format!("{}: {e}", mail.to)))?;
    Message::builder()
        .from(from.clone())
        .to(to)
        .subject(mail.subject.clone())
        .header(ContentType::TEXT_PLAIN)
        .body(mail.body.clone())
        .map_err(|e| MailError::Build(e.to_string()))
}

#[async_trait]
impl MailTransport for SmtpTransport {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        let message = self.build_message(mail)?;
        self.inner
            .send(message)
            .await
            .map_err(|e| MailError::Transport(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sender() -> Mailbox {
        "desk@cocoloco.example".parse().unwrap()
    }

    #[test]
    fn message_rejects_missing_recipient() {
        let mail = OutgoingMail { to: String::new(), subject: "s".into(), body: "b".into() };
        assert!(matches!(build_message(&sender(), &mail), Err(MailError::Address(_))));
    }

    #[test]
    fn message_carries_subject_and_recipient() {
        let mail = OutgoingMail { to: " guest@example.com ".into(), subject: "Query Status Response".into(), body: "hello".into() };
        let msg = build_message(&sender(), &mail).unwrap();
        let raw = String::from_utf8(msg.formatted()).unwrap();
        assert!(raw.contains("Subject: Query Status Response"));
        assert!(raw.contains("To: guest@example.com"));
    }

    #[test]
    fn config_with_bad_sender_is_rejected() {
        let mut cfg = configs::MailConfig::default();
        cfg.from = "not an address".into();
        assert!(matches!(SmtpTransport::from_config(&cfg), Err(MailError::Config(_))));
    }
}
