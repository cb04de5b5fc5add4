mod database_config;
mod http_config;
mod mailgun_config;
mod raw_config;
mod scheduler_jobs_config;
mod security_config;

use url::Url;

pub use self::{
    database_config::DatabaseConfig,
    http_config::{HttpClientConfig, HttpConfig},
    mailgun_config::MailgunConfig,
    raw_config::RawConfig,
    scheduler_jobs_config::SchedulerJobsConfig,
    security_config::SecurityConfig,
};

/// Main server config.
#[derive(Clone, Debug)]
pub struct Config {
    /// External/public URL through which service is being accessed.
    #[allow(dead_code)]
    pub public_url: Url,
    /// Database configuration.
    pub db: DatabaseConfig,
    /// Configuration for the HTTP functionality.
    pub http: HttpConfig,
    /// Security configuration (JWT secret, token lifetime).
    pub security: SecurityConfig,
    /// Configuration for the scheduler jobs.
    pub scheduler: SchedulerJobsConfig,
    /// Configuration for the Mailgun email delivery, if available.
    pub mailgun: Option<MailgunConfig>,
}

impl From<RawConfig> for Config {
    fn from(raw_config: RawConfig) -> Self {
        Self {
            public_url: raw_config.public_url,
            db: raw_config.db,
            http: raw_config.http,
            security: raw_config.security,
            scheduler: raw_config.scheduler,
            mailgun: raw_config.mailgun,
        }
    }
}

impl AsRef<Config> for Config {
    fn as_ref(&self) -> &Config {
        self
    }
}
