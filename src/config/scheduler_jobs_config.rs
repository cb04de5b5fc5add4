use serde_derive::{Deserialize, Serialize};

/// Configuration for the scheduler jobs.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SchedulerJobsConfig {
    /// The cron schedule used for the `EmailsSend` job that evaluates the recurring email job
    /// table. The default is a tick every 60 seconds.
    pub emails_send: String,
    /// Number of consecutive failed delivery attempts after which a recurring email job is dropped
    /// from the table.
    pub max_send_attempts: u32,
}

impl Default for SchedulerJobsConfig {
    fn default() -> Self {
        Self {
            emails_send: "0 * * * * *".to_string(),
            max_send_attempts: 10,
        }
    }
}
