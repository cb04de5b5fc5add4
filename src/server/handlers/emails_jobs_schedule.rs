use crate::{
    error::Error as MailcastError,
    scheduler::ScheduleEmailParams,
    server::app_state::AppState,
    users::User,
};
use actix_web::{HttpResponse, web};

pub async fn emails_jobs_schedule(
    _user: User,
    state: web::Data<AppState>,
    body_params: web::Json<ScheduleEmailParams>,
) -> Result<HttpResponse, MailcastError> {
    let job = state
        .api
        .scheduler()
        .schedule(body_params.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(job))
}
