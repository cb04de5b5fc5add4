use crate::{server::app_state::AppState, users::User};
use actix_web::{HttpResponse, Responder, web};

pub async fn emails_jobs_list(_user: User, state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.api.scheduler().list().await)
}
