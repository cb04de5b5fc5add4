use async_trait::async_trait;
use reqwest::StatusCode;
use serde_derive::{Deserialize, Serialize};

/// Receipt returned by the email delivery provider for an accepted message.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct DeliveryReceipt {
    /// Provider-assigned message identifier, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Human-readable provider response, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Errors that can occur while delivering an email through the gateway. The scheduler treats both
/// variants identically (the failed job is retried).
#[derive(thiserror::Error, Debug)]
pub enum EmailGatewayError {
    /// The gateway responded with a non-success status code.
    #[error("email gateway responded with status code `{status}`")]
    Api { status: StatusCode },
    /// A network-level failure (including timeouts) occurred before a response was received.
    #[error("transient error while contacting the email gateway: {source}")]
    Transient {
        #[source]
        source: anyhow::Error,
    },
}

/// An abstraction over the remote service that performs actual email delivery.
#[async_trait]
pub trait EmailGateway: Send + Sync {
    /// Sends an email with the specified subject to the specified recipients.
    async fn send(&self, to: &[String], subject: &str)
    -> Result<DeliveryReceipt, EmailGatewayError>;
}

#[cfg(test)]
pub mod tests {
    use super::{DeliveryReceipt, EmailGateway, EmailGatewayError};
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use std::sync::{
        Mutex,
        atomic::{AtomicBool, Ordering},
    };

    /// In-memory gateway stub that records sent emails and can be switched into a failing mode.
    #[derive(Default)]
    pub struct StubEmailGateway {
        failing: AtomicBool,
        sent: Mutex<Vec<(Vec<String>, String)>>,
    }

    impl StubEmailGateway {
        pub fn new_ok() -> Self {
            Self::default()
        }

        pub fn new_err() -> Self {
            let gateway = Self::default();
            gateway.set_failing(true);
            gateway
        }

        pub fn set_failing(&self, failing: bool) {
            self.failing.store(failing, Ordering::SeqCst);
        }

        pub fn sent(&self) -> Vec<(Vec<String>, String)> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl EmailGateway for StubEmailGateway {
        async fn send(
            &self,
            to: &[String],
            subject: &str,
        ) -> Result<DeliveryReceipt, EmailGatewayError> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(EmailGatewayError::Api {
                    status: StatusCode::SERVICE_UNAVAILABLE,
                });
            }

            self.sent
                .lock()
                .unwrap()
                .push((to.to_vec(), subject.to_string()));
            Ok(DeliveryReceipt {
                id: Some("<stub@mailcast.dev>".to_string()),
                message: Some("Queued.".to_string()),
            })
        }
    }
}
