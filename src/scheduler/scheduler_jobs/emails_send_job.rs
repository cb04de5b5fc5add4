use crate::{api::Api, scheduler::TickSummary};
use std::{sync::Arc, time::Instant};
use tokio_cron_scheduler::Job;

/// The job executes on a regular interval to evaluate the recurring email job table and send any
/// due emails.
pub(crate) struct EmailsSendJob;
impl EmailsSendJob {
    /// Creates a new `EmailsSendJob` job.
    pub fn create(api: Arc<Api>) -> anyhow::Result<Job> {
        Ok(Job::new_async(
            api.config.scheduler.emails_send.clone(),
            move |_, _| {
                let api = api.clone();
                Box::pin(async move {
                    Self::execute(api).await;
                })
            },
        )?)
    }

    /// Executes a `EmailsSendJob` job.
    async fn execute(api: Arc<Api>) {
        let execute_start = Instant::now();
        let summary = api.scheduler().tick().await;
        if summary != TickSummary::default() {
            tracing::info!(
                sent = summary.sent,
                failed = summary.failed,
                expired = summary.expired,
                dropped = summary.dropped,
                "Evaluated recurring email jobs ({} ms elapsed).",
                execute_start.elapsed().as_millis()
            );
        }
    }
}
