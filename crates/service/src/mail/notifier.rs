use std::{str::FromStr, sync::Arc, time::Duration};

use tracing::{info, warn};

use super::{MailTransport, OutgoingMail};

/// Whether the request waits for delivery to finish.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchMode {
    /// Hand the message to a spawned task and return immediately.
    Background,
    /// Deliver inside the request, still bounded by the timeout.
    Inline,
}

impl FromStr for DispatchMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "background" => Ok(DispatchMode::Background),
            "inline" => Ok(DispatchMode::Inline),
            other => Err(format!("unknown dispatch mode `{other}`")),
        }
    }
}

/// Fire-and-forget mail dispatch.
///
/// Delivery errors and timeouts are logged at `warn` and dropped; callers
/// never observe them.
#[derive(Clone)]
pub struct Notifier {
    transport: Arc<dyn MailTransport>,
    timeout: Duration,
    mode: DispatchMode,
}

impl Notifier {
    pub fn new(transport: Arc<dyn MailTransport>, timeout: Duration, mode: DispatchMode) -> Self {
        Self { transport, timeout, mode }
    }

    pub fn mode(&self) -> DispatchMode { self.mode }

    pub async fn dispatch(&self, mail: OutgoingMail) {
        match self.mode {
            DispatchMode::Inline => deliver(Arc::clone(&self.transport), self.timeout, mail).await,
            DispatchMode::Background => {
                tokio::spawn(deliver(Arc::clone(&self.transport), self.timeout, mail));
            }
        }
    }
}

async fn deliver(transport: Arc<dyn MailTransport>, limit: Duration, mail: OutgoingMail) {
    match tokio::time::timeout(limit, transport.send(&mail)).await {
        Ok(Ok(())) => info!(to = %mail.to, subject = %mail.subject, "notification_sent"),
        Ok(Err(e)) => warn!(to = %mail.to, error = %e, "notification_failed"),
        Err(_) => warn!(to = %mail.to, timeout_ms = limit.as_millis() as u64, "notification_timed_out"),
    }
}
