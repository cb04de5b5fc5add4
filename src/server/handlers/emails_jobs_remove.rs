use crate::{
    scheduler::RecurringJobId,
    server::app_state::AppState,
    users::User,
};
use actix_web::{HttpResponse, Responder, web};

pub async fn emails_jobs_remove(
    _user: User,
    state: web::Data<AppState>,
    job_id: web::Path<String>,
) -> impl Responder {
    let removed = state
        .api
        .scheduler()
        .remove(&RecurringJobId::from(job_id.into_inner()))
        .await;
    HttpResponse::Ok().json(removed)
}
