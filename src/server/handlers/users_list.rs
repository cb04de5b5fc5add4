use crate::{error::Error as MailcastError, server::app_state::AppState, users::User};
use actix_web::{HttpResponse, web};

pub async fn users_list(
    _user: User,
    state: web::Data<AppState>,
) -> Result<HttpResponse, MailcastError> {
    let users = state.api.users().list().await?;
    Ok(HttpResponse::Ok().json(users))
}
