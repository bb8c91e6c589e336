//! Outgoing mail: the transport abstraction, its implementations, and the
//! [`Notifier`] that dispatches without letting failures reach the caller.

pub mod log;
pub mod notifier;
pub mod smtp;

use async_trait::async_trait;
use thiserror::Error;

pub use notifier::{DispatchMode, Notifier};

/// A fully rendered message ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid address: {0}")]
    Address(String),
    #[error("cannot build message: {0}")]
    Build(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("invalid mail configuration: {0}")]
    Config(String),
}

/// Delivery backend for [`OutgoingMail`].
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError>;
}

/// Recording transport for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    pub struct RecordingTransport {
        sent: Mutex<Vec<OutgoingMail>>,
        fail: AtomicBool,
        delay: Mutex<Option<Duration>>,
    }

    impl RecordingTransport {
        pub fn new() -> Self { Self::default() }

        /// Every following send is recorded, then reported as failed.
        pub fn failing() -> Self {
            let t = Self::default();
            t.fail.store(true, Ordering::SeqCst);
            t
        }

        /// Every following send sleeps for `delay` before completing.
        pub fn slow(delay: Duration) -> Self {
            let t = Self::default();
            *t.delay.lock().unwrap_or_else(|p| p.into_inner()) = Some(delay);
            t
        }

        /// Messages handed to this transport so far, in order.
        pub fn sent(&self) -> Vec<OutgoingMail> {
            self.sent.lock().unwrap_or_else(|p| p.into_inner()).clone()
        }
    }

    #[async_trait]
    impl MailTransport for RecordingTransport {
        async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
            self.sent.lock().unwrap_or_else(|p| p.into_inner()).push(mail.clone());
            let delay = *self.delay.lock().unwrap_or_else(|p| p.into_inner());
            if let Some(d) = delay {
                tokio::time::sleep(d).await;
            }
            if self.fail.load(Ordering::SeqCst) {
                return Err(MailError::Transport("relay rejected message".into()));
            }
            Ok(())
        }
    }
}
