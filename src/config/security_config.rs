use serde_derive::{Deserialize, Serialize};
use serde_with::{DurationSeconds, serde_as};
use std::time::Duration;

/// Configuration for the authentication functionality.
#[serde_as]
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SecurityConfig {
    /// Secret key used to sign JWT tokens used for HTTP authentication. If not provided, HTTP
    /// authentication will be disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_secret: Option<String>,
    /// For how long an issued access token stays valid. Default is 30 minutes.
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "default_access_token_ttl")]
    pub access_token_ttl: Duration,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            access_token_ttl: default_access_token_ttl(),
        }
    }
}

/// Default lifetime of an issued access token.
const fn default_access_token_ttl() -> Duration {
    Duration::from_secs(1800)
}

#[cfg(test)]
mod tests {
    use super::SecurityConfig;
    use insta::assert_toml_snapshot;
    use std::time::Duration;

    #[test]
    fn serialization_and_default() {
        assert_toml_snapshot!(SecurityConfig::default(), @"access_token_ttl = 1800");

        let config = SecurityConfig {
            jwt_secret: Some("3024bf8975b03b84e405f36a7bacd1c1".to_string()),
            ..Default::default()
        };
        assert_toml_snapshot!(config, @r###"
        jwt_secret = '3024bf8975b03b84e405f36a7bacd1c1'
        access_token_ttl = 1800
        "###);
    }

    #[test]
    fn deserialization() {
        let config: SecurityConfig = toml::from_str(
            r#"
        jwt_secret = '3024bf8975b03b84e405f36a7bacd1c1'
        access_token_ttl = 600
    "#,
        )
        .unwrap();
        assert_eq!(
            config,
            SecurityConfig {
                jwt_secret: Some("3024bf8975b03b84e405f36a7bacd1c1".to_string()),
                access_token_ttl: Duration::from_secs(600),
            }
        );
    }
}
