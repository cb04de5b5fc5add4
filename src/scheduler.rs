mod api_ext;
mod recurring_job;
mod recurring_job_id;
mod recurring_job_retry_state;
mod recurring_job_table;
mod schedule_email_params;
mod scheduler_jobs;

pub use self::{
    recurring_job::RecurringJob,
    recurring_job_id::RecurringJobId,
    recurring_job_retry_state::RecurringJobRetryState,
    recurring_job_table::{RecurringJobTable, TickSummary},
    schedule_email_params::ScheduleEmailParams,
};

use crate::{api::Api, scheduler::scheduler_jobs::EmailsSendJob};
use std::sync::Arc;
use tokio_cron_scheduler::JobScheduler;

/// The scheduler drives the periodic evaluation of the recurring email job table. The job store is
/// in-memory, mirroring the job table itself.
pub struct Scheduler {
    inner_scheduler: JobScheduler,
}

impl Scheduler {
    /// Starts the scheduler with the periodic email dispatch job registered.
    pub async fn start(api: Arc<Api>) -> anyhow::Result<Self> {
        let scheduler = Self {
            inner_scheduler: JobScheduler::new().await?,
        };

        scheduler
            .inner_scheduler
            .add(EmailsSendJob::create(api)?)
            .await?;
        scheduler.inner_scheduler.start().await?;

        Ok(scheduler)
    }
}
