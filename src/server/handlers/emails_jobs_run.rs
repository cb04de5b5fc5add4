use crate::{
    error::Error as MailcastError,
    scheduler::RecurringJobId,
    server::app_state::AppState,
    users::User,
};
use actix_web::{HttpResponse, web};
use serde_json::json;

/// Runs the specified recurring email job immediately, regardless of its schedule.
pub async fn emails_jobs_run(
    _user: User,
    state: web::Data<AppState>,
    job_id: web::Path<String>,
) -> Result<HttpResponse, MailcastError> {
    Ok(
        match state
            .api
            .scheduler()
            .tick_one(&RecurringJobId::from(job_id.into_inner()))
            .await?
        {
            Some(job) => HttpResponse::Ok().json(job),
            None => {
                HttpResponse::NotFound().json(json!({ "message": "Email job is not found." }))
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::emails_jobs_run;
    use crate::{
        network::{Network, tests::StubEmailGateway},
        scheduler::ScheduleEmailParams,
        tests::{MockUserBuilder, mock_app_state_with_network},
    };
    use actix_web::web;
    use std::sync::Arc;
    use time::OffsetDateTime;
    use uuid::uuid;

    #[tokio::test]
    async fn runs_job_on_demand() -> anyhow::Result<()> {
        let gateway = Arc::new(StubEmailGateway::new_ok());
        let state = web::Data::new(mock_app_state_with_network(Network::new(gateway.clone()))?);
        let user = MockUserBuilder::new(
            uuid!("00000000-0000-0000-0000-000000000001").into(),
            "dev",
            "dev@mailcast.dev",
            OffsetDateTime::from_unix_timestamp(946720800)?,
        )
        .build();

        let job = state
            .api
            .scheduler()
            .schedule(ScheduleEmailParams {
                to_emails: vec!["a@example.com".to_string()],
                subject: "S".to_string(),
                interval_minutes: 10,
                duration_minutes: None,
                job_id: None,
            })
            .await?;

        let response = emails_jobs_run(
            user.clone(),
            state.clone(),
            web::Path::from(job.id.to_string()),
        )
        .await?;
        assert_eq!(response.status().as_u16(), 200);
        assert_eq!(gateway.sent().len(), 1);

        let response = emails_jobs_run(
            user,
            state,
            web::Path::from("email_job_unknown".to_string()),
        )
        .await?;
        assert_eq!(response.status().as_u16(), 404);
        assert_eq!(gateway.sent().len(), 1);

        Ok(())
    }
}
