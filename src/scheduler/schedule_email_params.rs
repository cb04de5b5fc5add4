use serde_derive::Deserialize;

/// Parameters of the recurring email schedule request.
#[derive(Deserialize, Debug, Clone)]
pub struct ScheduleEmailParams {
    /// Recipient addresses, must be non-empty.
    pub to_emails: Vec<String>,
    pub subject: String,
    /// Interval in minutes between sends, must be positive. Default is 10 minutes.
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u32,
    /// For how long to keep sending, in minutes. If not specified, the job runs indefinitely.
    pub duration_minutes: Option<u32>,
    /// Optional caller-supplied job identifier. Must not collide with an existing job.
    pub job_id: Option<String>,
}

const fn default_interval_minutes() -> u32 {
    10
}
