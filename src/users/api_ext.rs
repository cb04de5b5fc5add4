use crate::{
    api::Api,
    error::Error as MailcastError,
    security::StoredCredentials,
    users::{User, UserId},
};
use anyhow::Context;
use serde_derive::Deserialize;
use time::OffsetDateTime;
use tracing::info;

/// Parameters of the user signup request.
#[derive(Deserialize, Debug, Clone)]
pub struct UserSignupParams {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub password: String,
}

/// Parameters of the partial user update request. Fields that aren't provided keep their stored
/// values.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct UserUpdateParams {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
    pub disabled: Option<bool>,
}

/// Describes the API to work with users.
pub struct UsersApiExt<'a> {
    api: &'a Api,
}

impl<'a> UsersApiExt<'a> {
    /// Creates Users API.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Signs up a user with the specified username, email and password. If a user with such
    /// username or email is already registered, this method fails.
    pub async fn signup(&self, params: UserSignupParams) -> anyhow::Result<User> {
        if params.username.trim().is_empty() {
            return Err(MailcastError::client("Username cannot be empty.").into());
        }

        if params.email.is_empty() || !params.email.contains('@') {
            return Err(MailcastError::client(format!(
                "Invalid user email `{}`.",
                params.email
            ))
            .into());
        }

        if let Some(user) = self
            .api
            .db
            .get_user_by_username(&params.username)
            .await
            .with_context(|| "Failed to check if user already exists.")?
        {
            return Err(MailcastError::client(format!(
                "User with username `{}` is already registered.",
                user.username
            ))
            .into());
        }

        if self.api.db.get_user_by_email(&params.email).await?.is_some() {
            return Err(MailcastError::client(format!(
                "User with email `{}` is already registered.",
                params.email
            ))
            .into());
        }

        let user = User {
            id: UserId::new(),
            username: params.username,
            email: params.email,
            full_name: params.full_name,
            credentials: StoredCredentials::try_from_password(&params.password)
                .map_err(MailcastError::client_with_root_cause)?,
            disabled: false,
            created_at: OffsetDateTime::now_utc(),
        };

        self.api
            .db
            .insert_user(&user)
            .await
            .with_context(|| "Cannot signup user, failed to insert a new user.")?;

        info!(user.id = %user.id, "Successfully signed up user `{}`.", user.username);
        Ok(user)
    }

    /// Retrieves the user with the specified ID.
    pub async fn get(&self, id: UserId) -> anyhow::Result<Option<User>> {
        self.api.db.get_user(id).await
    }

    /// Retrieves the user with the specified username.
    pub async fn get_by_username<T: AsRef<str>>(&self, username: T) -> anyhow::Result<Option<User>> {
        self.api.db.get_user_by_username(username).await
    }

    /// Retrieves the user with the specified email.
    #[allow(dead_code)]
    pub async fn get_by_email<T: AsRef<str>>(&self, email: T) -> anyhow::Result<Option<User>> {
        self.api.db.get_user_by_email(email).await
    }

    /// Retrieves all users.
    pub async fn list(&self) -> anyhow::Result<Vec<User>> {
        self.api.db.get_users().await
    }

    /// Partially updates the user with the specified ID and returns the updated user, or `None` if
    /// the user doesn't exist.
    pub async fn update(
        &self,
        id: UserId,
        params: UserUpdateParams,
    ) -> anyhow::Result<Option<User>> {
        if let Some(ref email) = params.email {
            if email.is_empty() || !email.contains('@') {
                return Err(MailcastError::client(format!("Invalid user email `{email}`.")).into());
            }
        }

        let password_hash = params
            .password
            .as_deref()
            .map(|password| {
                StoredCredentials::try_from_password(password)
                    .map(|credentials| credentials.password_hash)
                    .map_err(MailcastError::client_with_root_cause)
            })
            .transpose()?;

        let updated = self
            .api
            .db
            .update_user(
                id,
                params.email.as_deref(),
                params.full_name.as_deref(),
                password_hash.as_deref(),
                params.disabled,
            )
            .await?;
        if !updated {
            return Ok(None);
        }

        self.get(id).await
    }

    /// Removes the user with the specified ID. Returns `false` if the user doesn't exist.
    pub async fn remove(&self, id: UserId) -> anyhow::Result<bool> {
        let removed = self.api.db.remove_user(id).await?;
        if removed {
            info!(user.id = %id, "Successfully removed user.");
        }
        Ok(removed)
    }
}

impl Api {
    /// Returns an API to work with users.
    pub fn users(&self) -> UsersApiExt<'_> {
        UsersApiExt::new(self)
    }
}
