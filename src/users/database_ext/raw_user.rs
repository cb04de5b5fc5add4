use crate::{
    security::StoredCredentials,
    users::{User, UserId},
};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(sqlx::FromRow, Debug, Clone, PartialEq)]
pub(super) struct RawUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub password_hash: String,
    pub disabled: bool,
    pub created_at: OffsetDateTime,
}

impl From<RawUser> for User {
    fn from(raw_user: RawUser) -> Self {
        User {
            id: UserId::from(raw_user.id),
            username: raw_user.username,
            email: raw_user.email,
            full_name: raw_user.full_name,
            credentials: StoredCredentials {
                password_hash: raw_user.password_hash,
            },
            disabled: raw_user.disabled,
            created_at: raw_user.created_at,
        }
    }
}

impl From<&User> for RawUser {
    fn from(user: &User) -> Self {
        RawUser {
            id: *user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            password_hash: user.credentials.password_hash.clone(),
            disabled: user.disabled,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RawUser;
    use crate::tests::MockUserBuilder;
    use crate::users::User;
    use time::OffsetDateTime;
    use uuid::uuid;

    #[test]
    fn can_convert_into_user_and_back() -> anyhow::Result<()> {
        let raw_user = RawUser {
            id: uuid!("00000000-0000-0000-0000-000000000001"),
            username: "dev".to_string(),
            email: "dev@mailcast.dev".to_string(),
            full_name: None,
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$hash".to_string(),
            disabled: false,
            created_at: OffsetDateTime::from_unix_timestamp(1262340000)?,
        };

        let user = User::from(raw_user.clone());
        assert_eq!(*user.id, raw_user.id);
        assert_eq!(user.username, "dev");
        assert_eq!(user.credentials.password_hash, raw_user.password_hash);

        assert_eq!(RawUser::from(&user), raw_user);

        Ok(())
    }

    #[test]
    fn preserves_optional_fields() -> anyhow::Result<()> {
        let user = MockUserBuilder::new(
            uuid!("00000000-0000-0000-0000-000000000002").into(),
            "dev2",
            "dev2@mailcast.dev",
            OffsetDateTime::from_unix_timestamp(1262340000)?,
        )
        .set_full_name("Dev Developer")
        .set_disabled()
        .build();

        let raw_user = RawUser::from(&user);
        assert_eq!(raw_user.full_name.as_deref(), Some("Dev Developer"));
        assert!(raw_user.disabled);

        Ok(())
    }
}
