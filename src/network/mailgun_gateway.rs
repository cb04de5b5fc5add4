use crate::{
    config::MailgunConfig,
    network::{DeliveryReceipt, EmailGateway, EmailGatewayError},
};
use anyhow::anyhow;
use async_trait::async_trait;
use reqwest_middleware::ClientWithMiddleware;
use tracing::debug;

/// `EmailGateway` implementation backed by the Mailgun messages HTTP API.
pub struct MailgunGateway {
    client: ClientWithMiddleware,
    config: MailgunConfig,
}

impl MailgunGateway {
    /// Creates a new gateway that sends messages through the configured Mailgun domain.
    pub fn new(client: ClientWithMiddleware, config: MailgunConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl EmailGateway for MailgunGateway {
    async fn send(
        &self,
        to: &[String],
        subject: &str,
    ) -> Result<DeliveryReceipt, EmailGatewayError> {
        let messages_url = self
            .config
            .base_url
            .join(&format!("v3/{}/messages", self.config.domain))
            .map_err(|err| EmailGatewayError::Transient {
                source: anyhow!("Cannot construct Mailgun messages URL: {err}"),
            })?;

        let mut form = vec![
            ("from", self.config.from_email.clone()),
            ("subject", subject.to_string()),
        ];
        for recipient in to {
            form.push(("to", recipient.clone()));
        }

        let response = self
            .client
            .post(messages_url)
            .basic_auth("api", Some(&self.config.api_key))
            .form(&form)
            .send()
            .await
            .map_err(|err| EmailGatewayError::Transient {
                source: anyhow!(err),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmailGatewayError::Api { status });
        }

        let receipt =
            response
                .json::<DeliveryReceipt>()
                .await
                .map_err(|err| EmailGatewayError::Transient {
                    source: anyhow!(err),
                })?;
        debug!(
            "Mailgun accepted message for {} recipient(s): {:?}.",
            to.len(),
            receipt.id
        );

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::MailgunGateway;
    use crate::{
        config::{HttpClientConfig, MailgunConfig},
        network::{EmailGateway, EmailGatewayError, create_http_client},
    };
    use httpmock::MockServer;
    use serde_json::json;
    use url::Url;

    fn mock_client_config() -> HttpClientConfig {
        HttpClientConfig {
            max_retries: 0,
            ..Default::default()
        }
    }

    fn mock_gateway(server: &MockServer) -> anyhow::Result<MailgunGateway> {
        Ok(MailgunGateway::new(
            create_http_client(&mock_client_config())?,
            MailgunConfig {
                api_key: "key-3ax6xnjp29jd6fds4gc373sgvjxteol0".to_string(),
                domain: "mg.mailcast.dev".to_string(),
                from_email: "no-reply@mg.mailcast.dev".to_string(),
                base_url: Url::parse(&server.base_url())?,
            },
        ))
    }

    #[tokio::test]
    async fn can_send_message() -> anyhow::Result<()> {
        let server = MockServer::start();
        let messages_mock = server.mock(|when, then| {
            when.method(httpmock::Method::POST)
                .path("/v3/mg.mailcast.dev/messages")
                .body_includes("to=a%40example.com")
                .body_includes("to=b%40example.com")
                .body_includes("subject=Hello");
            then.status(200).json_body(json!({
                "id": "<20240115.1@mg.mailcast.dev>",
                "message": "Queued. Thank you."
            }));
        });

        let gateway = mock_gateway(&server)?;
        let receipt = gateway
            .send(
                &["a@example.com".to_string(), "b@example.com".to_string()],
                "Hello",
            )
            .await
            .map_err(|err| anyhow::anyhow!(err))?;

        assert_eq!(receipt.id.as_deref(), Some("<20240115.1@mg.mailcast.dev>"));
        messages_mock.assert();

        Ok(())
    }

    #[tokio::test]
    async fn fails_with_api_error_on_non_success_response() -> anyhow::Result<()> {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(httpmock::Method::POST)
                .path("/v3/mg.mailcast.dev/messages");
            then.status(401).json_body(json!({ "message": "Forbidden" }));
        });

        let gateway = mock_gateway(&server)?;
        let error = gateway
            .send(&["a@example.com".to_string()], "Hello")
            .await
            .unwrap_err();
        assert!(
            matches!(error, EmailGatewayError::Api { status } if status.as_u16() == 401),
            "unexpected error: {error:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn fails_with_transient_error_when_gateway_is_unreachable() -> anyhow::Result<()> {
        // Port 9 (discard) is not expected to accept connections.
        let gateway = MailgunGateway::new(
            create_http_client(&mock_client_config())?,
            MailgunConfig {
                api_key: "key".to_string(),
                domain: "mg.mailcast.dev".to_string(),
                from_email: "no-reply@mg.mailcast.dev".to_string(),
                base_url: Url::parse("http://127.0.0.1:9")?,
            },
        );

        let error = gateway
            .send(&["a@example.com".to_string()], "Hello")
            .await
            .unwrap_err();
        assert!(
            matches!(error, EmailGatewayError::Transient { .. }),
            "unexpected error: {error:?}"
        );

        Ok(())
    }
}
