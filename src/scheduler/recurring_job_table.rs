use crate::{
    error::Error as MailcastError,
    network::EmailGateway,
    scheduler::{RecurringJob, RecurringJobId, RecurringJobRetryState, ScheduleEmailParams},
};
use anyhow::anyhow;
use std::collections::HashMap;
use time::{Duration, OffsetDateTime};
use tokio::sync::RwLock;

/// Summary of a single scheduler pass over the recurring job table.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Number of jobs for which an email was successfully sent.
    pub sent: usize,
    /// Number of due jobs whose delivery failed and that will be retried on the next pass.
    pub failed: usize,
    /// Number of jobs removed because their end time has passed.
    pub expired: usize,
    /// Number of jobs removed after exhausting the maximum number of delivery attempts.
    pub dropped: usize,
}

/// In-memory table of recurring email jobs. The table is process-local and volatile, jobs don't
/// survive a restart. All operations acquire the table lock, and `tick` holds the write lock for
/// the whole pass, so a pass never interleaves with `schedule` or `remove` and at most one pass
/// runs at a time.
///
/// The current time is always passed in explicitly so that tests can drive the table with a fake
/// clock.
#[derive(Default)]
pub struct RecurringJobTable {
    jobs: RwLock<HashMap<RecurringJobId, RecurringJob>>,
}

impl RecurringJobTable {
    /// Adds a new recurring job to the table and returns it. The first send happens one interval
    /// after `now`. Caller-supplied job IDs that collide with an existing job are rejected rather
    /// than silently overwriting the existing job.
    pub async fn schedule(
        &self,
        params: ScheduleEmailParams,
        now: OffsetDateTime,
    ) -> anyhow::Result<RecurringJob> {
        if params.to_emails.is_empty() {
            return Err(MailcastError::client("At least one recipient is required.").into());
        }

        for email in &params.to_emails {
            if !email.contains('@') {
                return Err(MailcastError::client(format!(
                    "Recipient email ('{email}') is not valid."
                ))
                .into());
            }
        }

        if params.interval_minutes == 0 {
            return Err(MailcastError::client("Interval must be at least one minute.").into());
        }

        if params.duration_minutes == Some(0) {
            return Err(MailcastError::client("Duration must be at least one minute.").into());
        }

        let mut jobs = self.jobs.write().await;
        let id = match params.job_id {
            Some(id) if id.is_empty() => {
                return Err(MailcastError::client("Job ID cannot be empty.").into());
            }
            Some(id) => {
                let id = RecurringJobId::from(id);
                if jobs.contains_key(&id) {
                    return Err(
                        MailcastError::client(format!("Email job ('{id}') already exists.")).into(),
                    );
                }
                id
            }
            None => loop {
                let id = RecurringJobId::generate();
                if !jobs.contains_key(&id) {
                    break id;
                }
            },
        };

        let job = RecurringJob {
            id: id.clone(),
            to_emails: params.to_emails,
            subject: params.subject,
            interval_minutes: params.interval_minutes,
            next_run: now + Duration::minutes(i64::from(params.interval_minutes)),
            end_time: params
                .duration_minutes
                .map(|duration_minutes| now + Duration::minutes(i64::from(duration_minutes))),
            created_at: now,
            retry: None,
        };
        jobs.insert(id, job.clone());

        Ok(job)
    }

    /// Evaluates every job in the table once: expired jobs are removed without sending, due jobs
    /// trigger a gateway send. On success the job advances one interval past `now` and its retry
    /// state clears. On failure `next_run` is left unchanged so the job is retried on the next
    /// pass, until `max_send_attempts` consecutive failures remove it. A failed send never aborts
    /// the rest of the pass.
    pub async fn tick(
        &self,
        gateway: &dyn EmailGateway,
        max_send_attempts: u32,
        now: OffsetDateTime,
    ) -> TickSummary {
        let mut summary = TickSummary::default();
        let mut jobs = self.jobs.write().await;

        let eligible_job_ids = jobs
            .values()
            .filter(|job| job.is_expired(now) || job.is_due(now))
            .map(|job| job.id.clone())
            .collect::<Vec<_>>();
        for job_id in eligible_job_ids {
            let Some(job) = jobs.get(&job_id) else {
                continue;
            };

            if job.is_expired(now) {
                jobs.remove(&job_id);
                summary.expired += 1;
                tracing::info!(job.id = %job_id, "Removed expired email job.");
                continue;
            }

            let (to_emails, subject) = (job.to_emails.clone(), job.subject.clone());
            match gateway.send(&to_emails, &subject).await {
                Ok(receipt) => {
                    if let Some(job) = jobs.get_mut(&job_id) {
                        job.next_run = now + job.interval();
                        job.retry = None;
                        summary.sent += 1;
                        tracing::debug!(
                            job.id = %job_id,
                            receipt.id = receipt.id.as_deref(),
                            "Sent recurring email."
                        );
                    }
                }
                Err(err) => {
                    let attempts = jobs
                        .get(&job_id)
                        .and_then(|job| job.retry)
                        .map_or(1, |retry| retry.attempts + 1);
                    if attempts >= max_send_attempts {
                        jobs.remove(&job_id);
                        summary.dropped += 1;
                        tracing::error!(
                            job.id = %job_id,
                            attempts,
                            "Removed email job after too many failed delivery attempts: {err:?}"
                        );
                    } else if let Some(job) = jobs.get_mut(&job_id) {
                        job.retry = Some(RecurringJobRetryState {
                            attempts,
                            last_attempt_at: now,
                        });
                        summary.failed += 1;
                        tracing::warn!(
                            job.id = %job_id,
                            attempts,
                            "Failed to send recurring email, will retry: {err:?}"
                        );
                    }
                }
            }
        }

        summary
    }

    /// Sends the email for the specified job immediately, regardless of whether the job is due or
    /// past its end time. Returns `None` if the job doesn't exist. On success the job advances one
    /// interval past `now`, on failure it's left untouched.
    pub async fn tick_one(
        &self,
        gateway: &dyn EmailGateway,
        id: &RecurringJobId,
        now: OffsetDateTime,
    ) -> anyhow::Result<Option<RecurringJob>> {
        let mut jobs = self.jobs.write().await;
        let Some(job) = jobs.get(id) else {
            return Ok(None);
        };

        let (to_emails, subject) = (job.to_emails.clone(), job.subject.clone());
        gateway.send(&to_emails, &subject).await.map_err(|err| {
            MailcastError::client_with_root_cause(
                anyhow!(err).context(format!("Failed to send email for job ('{id}').")),
            )
        })?;

        Ok(jobs.get_mut(id).map(|job| {
            job.next_run = now + job.interval();
            job.retry = None;
            job.clone()
        }))
    }

    /// Returns the job with the specified ID, if it exists.
    #[allow(dead_code)]
    pub async fn get(&self, id: &RecurringJobId) -> Option<RecurringJob> {
        self.jobs.read().await.get(id).cloned()
    }

    /// Returns a snapshot of all jobs, ordered by creation time.
    pub async fn list(&self) -> Vec<RecurringJob> {
        let mut jobs = self
            .jobs
            .read()
            .await
            .values()
            .cloned()
            .collect::<Vec<_>>();
        jobs.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        jobs
    }

    /// Removes the job with the specified ID, returning `true` if it existed.
    pub async fn remove(&self, id: &RecurringJobId) -> bool {
        self.jobs.write().await.remove(id).is_some()
    }
}
