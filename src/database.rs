use crate::config::DatabaseConfig;
use anyhow::Context;
use sqlx::{PgPool, postgres::PgPoolOptions};

#[derive(Clone)]
pub struct Database {
    pub(crate) pool: PgPool,
}

/// Common methods for the primary database, extensions are implemented separately in every module.
impl Database {
    /// Opens database connection and runs the pending migrations.
    pub async fn create(config: &DatabaseConfig) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .connect_with(config.connect_options())
            .await
            .with_context(|| "Failed to connect to the database")?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .with_context(|| "Failed to migrate database")?;

        Ok(Database { pool })
    }
}

impl AsRef<Database> for Database {
    fn as_ref(&self) -> &Self {
        self
    }
}
