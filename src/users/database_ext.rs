mod raw_user;

use self::raw_user::RawUser;
use crate::{
    database::Database,
    users::{User, UserId},
};
use anyhow::Context;
use sqlx::{query, query_as};

/// Extends primary database with the user management-related methods.
impl Database {
    /// Retrieves user from the `users` table using user ID.
    pub async fn get_user(&self, id: UserId) -> anyhow::Result<Option<User>> {
        Ok(query_as::<_, RawUser>(
            r#"
SELECT id, username, email, full_name, password_hash, disabled, created_at
FROM users
WHERE id = $1
                "#,
        )
        .bind(*id)
        .fetch_optional(&self.pool)
        .await?
        .map(User::from))
    }

    /// Retrieves user from the `users` table using username.
    pub async fn get_user_by_username<T: AsRef<str>>(
        &self,
        username: T,
    ) -> anyhow::Result<Option<User>> {
        Ok(query_as::<_, RawUser>(
            r#"
SELECT id, username, email, full_name, password_hash, disabled, created_at
FROM users
WHERE username = $1
                "#,
        )
        .bind(username.as_ref())
        .fetch_optional(&self.pool)
        .await?
        .map(User::from))
    }

    /// Retrieves user from the `users` table using user email.
    pub async fn get_user_by_email<T: AsRef<str>>(&self, email: T) -> anyhow::Result<Option<User>> {
        Ok(query_as::<_, RawUser>(
            r#"
SELECT id, username, email, full_name, password_hash, disabled, created_at
FROM users
WHERE email = $1
                "#,
        )
        .bind(email.as_ref())
        .fetch_optional(&self.pool)
        .await?
        .map(User::from))
    }

    /// Retrieves all users from the `users` table.
    pub async fn get_users(&self) -> anyhow::Result<Vec<User>> {
        Ok(query_as::<_, RawUser>(
            r#"
SELECT id, username, email, full_name, password_hash, disabled, created_at
FROM users
ORDER BY created_at, username
                "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(User::from)
        .collect())
    }

    /// Inserts user to the `users` table, fails if the user already exists.
    pub async fn insert_user<U: AsRef<User>>(&self, user: U) -> anyhow::Result<()> {
        let raw_user = RawUser::from(user.as_ref());
        query(
            r#"
INSERT INTO users (id, username, email, full_name, password_hash, disabled, created_at)
VALUES ( $1, $2, $3, $4, $5, $6, $7 )
        "#,
        )
        .bind(raw_user.id)
        .bind(&raw_user.username)
        .bind(&raw_user.email)
        .bind(&raw_user.full_name)
        .bind(&raw_user.password_hash)
        .bind(raw_user.disabled)
        .bind(raw_user.created_at)
        .execute(&self.pool)
        .await
        .with_context(|| format!("Failed to insert user `{}`", raw_user.username))?;

        Ok(())
    }

    /// Partially updates user in the `users` table. Only the provided fields are changed; `None`
    /// fields keep their stored values. Returns `false` if the user doesn't exist.
    pub async fn update_user(
        &self,
        id: UserId,
        email: Option<&str>,
        full_name: Option<&str>,
        password_hash: Option<&str>,
        disabled: Option<bool>,
    ) -> anyhow::Result<bool> {
        let result = query(
            r#"
UPDATE users
SET email = COALESCE($2, email),
    full_name = COALESCE($3, full_name),
    password_hash = COALESCE($4, password_hash),
    disabled = COALESCE($5, disabled)
WHERE id = $1
        "#,
        )
        .bind(*id)
        .bind(email)
        .bind(full_name)
        .bind(password_hash)
        .bind(disabled)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Removes user with the specified ID from the `users` table. Returns `false` if the user
    /// doesn't exist.
    pub async fn remove_user(&self, id: UserId) -> anyhow::Result<bool> {
        let result = query(
            r#"
DELETE FROM users
WHERE id = $1
        "#,
        )
        .bind(*id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
