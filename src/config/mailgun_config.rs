use serde_derive::{Deserialize, Serialize};
use url::Url;

/// Configuration for the Mailgun transactional email API.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MailgunConfig {
    /// API key used to authenticate with the Mailgun API.
    pub api_key: String,
    /// Mailgun sending domain.
    pub domain: String,
    /// Address used as the `From` header of every sent email.
    pub from_email: String,
    /// Base URL of the Mailgun API.
    #[serde(default = "default_base_url")]
    pub base_url: Url,
}

/// Default base URL of the Mailgun API (US region).
fn default_base_url() -> Url {
    Url::parse("https://api.mailgun.net").expect("Cannot parse Mailgun base URL.")
}
