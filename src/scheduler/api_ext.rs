use crate::{
    api::Api,
    scheduler::{RecurringJob, RecurringJobId, ScheduleEmailParams, TickSummary},
};
use time::OffsetDateTime;

/// API extension that binds the recurring job table to the API's email gateway, scheduler
/// configuration, and the real clock.
pub struct SchedulerApiExt<'a> {
    api: &'a Api,
}

impl<'a> SchedulerApiExt<'a> {
    /// Creates Scheduler API.
    pub fn new(api: &'a Api) -> Self {
        Self { api }
    }

    /// Schedules a new recurring email job.
    pub async fn schedule(&self, params: ScheduleEmailParams) -> anyhow::Result<RecurringJob> {
        self.api
            .recurring_jobs
            .schedule(params, OffsetDateTime::now_utc())
            .await
    }

    /// Evaluates all recurring email jobs once, sending due emails through the API's gateway.
    pub async fn tick(&self) -> TickSummary {
        self.api
            .recurring_jobs
            .tick(
                self.api.network.email_gateway.as_ref(),
                self.api.config.scheduler.max_send_attempts,
                OffsetDateTime::now_utc(),
            )
            .await
    }

    /// Sends the email for the specified job immediately, regardless of its schedule.
    pub async fn tick_one(&self, id: &RecurringJobId) -> anyhow::Result<Option<RecurringJob>> {
        self.api
            .recurring_jobs
            .tick_one(
                self.api.network.email_gateway.as_ref(),
                id,
                OffsetDateTime::now_utc(),
            )
            .await
    }

    /// Returns the recurring email job with the specified ID, if it exists.
    #[allow(dead_code)]
    pub async fn get(&self, id: &RecurringJobId) -> Option<RecurringJob> {
        self.api.recurring_jobs.get(id).await
    }

    /// Returns a snapshot of all recurring email jobs.
    pub async fn list(&self) -> Vec<RecurringJob> {
        self.api.recurring_jobs.list().await
    }

    /// Removes the recurring email job with the specified ID, returning `true` if it existed.
    pub async fn remove(&self, id: &RecurringJobId) -> bool {
        self.api.recurring_jobs.remove(id).await
    }
}

impl Api {
    /// Returns an API to work with the recurring email job scheduler.
    pub fn scheduler(&self) -> SchedulerApiExt<'_> {
        SchedulerApiExt::new(self)
    }
}
