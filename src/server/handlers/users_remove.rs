use crate::{error::Error as MailcastError, server::app_state::AppState, users::User};
use actix_web::{HttpResponse, web};
use uuid::Uuid;

pub async fn users_remove(
    _user: User,
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse, MailcastError> {
    let removed = state
        .api
        .users()
        .remove(user_id.into_inner().into())
        .await?;
    Ok(HttpResponse::Ok().json(removed))
}
