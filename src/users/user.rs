use crate::{security::StoredCredentials, users::UserId};
use serde_derive::Serialize;
use time::OffsetDateTime;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing)]
    pub credentials: StoredCredentials,
    pub disabled: bool,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
}

impl AsRef<User> for User {
    fn as_ref(&self) -> &User {
        self
    }
}
