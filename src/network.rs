mod email_gateway;
mod mailgun_gateway;

pub use self::{
    email_gateway::{DeliveryReceipt, EmailGateway, EmailGatewayError},
    mailgun_gateway::MailgunGateway,
};

use crate::config::HttpClientConfig;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use std::sync::Arc;

/// Network utilities.
#[derive(Clone)]
pub struct Network {
    pub email_gateway: Arc<dyn EmailGateway>,
}

impl Network {
    /// Creates a new `Network` instance.
    pub fn new(email_gateway: Arc<dyn EmailGateway>) -> Self {
        Self { email_gateway }
    }
}

/// Creates an HTTP client that retries transient failures with exponential backoff and applies a
/// bounded total request timeout.
pub fn create_http_client(config: &HttpClientConfig) -> anyhow::Result<ClientWithMiddleware> {
    let client = reqwest::Client::builder()
        .timeout(config.timeout)
        .pool_idle_timeout(config.pool_idle_timeout)
        .build()?;

    Ok(ClientBuilder::new(client)
        .with(RetryTransientMiddleware::new_with_policy(
            ExponentialBackoff::builder().build_with_max_retries(config.max_retries),
        ))
        .build())
}

#[cfg(test)]
pub mod tests {
    pub use super::email_gateway::tests::*;
}
