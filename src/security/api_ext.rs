use crate::{api::Api, security::jwt::Claims, users::User};
use anyhow::anyhow;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use time::OffsetDateTime;
use tracing::warn;

/// Mailcast security controller.
pub struct SecurityApiExt<'a> {
    api: &'a Api,
}

impl<'a> SecurityApiExt<'a> {
    /// Instantiates security API extension.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Authenticates user with the specified username and password. Returns `None` when the user
    /// doesn't exist, is disabled, or the password doesn't match.
    pub async fn authenticate<T: AsRef<str>>(
        &self,
        username: T,
        password: T,
    ) -> anyhow::Result<Option<User>> {
        let username = username.as_ref();
        let Some(user) = self.api.users().get_by_username(username).await? else {
            warn!("Failed authentication attempt for unknown user `{username}`.");
            return Ok(None);
        };

        if user.disabled {
            warn!(user.id = %user.id, "Failed authentication attempt for disabled user.");
            return Ok(None);
        }

        if !user.credentials.verify_password(password.as_ref())? {
            warn!(user.id = %user.id, "Failed authentication attempt, password mismatch.");
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Issues a signed, time-boxed bearer token for the specified user.
    pub fn issue_token(&self, user: &User) -> anyhow::Result<String> {
        let Some(ref jwt_secret) = self.api.config.security.jwt_secret else {
            return Err(anyhow!("JWT secret is not configured."));
        };

        let claims = Claims {
            sub: user.username.clone(),
            exp: OffsetDateTime::now_utc() + self.api.config.security.access_token_ttl,
        };
        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(jwt_secret.as_bytes()),
        )?)
    }

    /// Tries to parse the bearer token and extract claims, rejecting expired or malformed tokens.
    pub fn validate_token(&self, token: &str) -> anyhow::Result<Claims> {
        let Some(ref jwt_secret) = self.api.config.security.jwt_secret else {
            return Err(anyhow!("JWT secret is not configured."));
        };

        Ok(decode::<Claims>(
            token,
            &DecodingKey::from_secret(jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )?
        .claims)
    }
}

impl Api {
    /// Returns an API to perform authentication-related tasks.
    pub fn security(&self) -> SecurityApiExt<'_> {
        SecurityApiExt::new(self)
    }
}
