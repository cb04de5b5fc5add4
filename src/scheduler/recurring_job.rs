use crate::scheduler::{RecurringJobId, RecurringJobRetryState};
use serde_derive::Serialize;
use time::{Duration, OffsetDateTime};

/// A recurring-send specification tracked by the scheduler.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RecurringJob {
    pub id: RecurringJobId,
    /// Recipient addresses, guaranteed to be non-empty.
    pub to_emails: Vec<String>,
    pub subject: String,
    /// Minimum time between sends, in minutes (>= 1).
    pub interval_minutes: u32,
    /// The earliest time at which the job becomes eligible for sending.
    #[serde(with = "time::serde::timestamp")]
    pub next_run: OffsetDateTime,
    /// Once passed, the job is no longer eligible and is purged on the next evaluation.
    #[serde(with = "time::serde::timestamp::option")]
    pub end_time: Option<OffsetDateTime>,
    #[serde(with = "time::serde::timestamp")]
    pub created_at: OffsetDateTime,
    /// Consecutive delivery failures, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<RecurringJobRetryState>,
}

impl RecurringJob {
    /// Returns the send interval as a duration.
    pub fn interval(&self) -> Duration {
        Duration::minutes(i64::from(self.interval_minutes))
    }

    /// Checks if the job is past its end time and should be purged without sending.
    pub fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.end_time.is_some_and(|end_time| end_time < now)
    }

    /// Checks if the job is eligible for sending.
    pub fn is_due(&self, now: OffsetDateTime) -> bool {
        self.next_run <= now
    }
}
