use crate::{error::Error as MailcastError, server::app_state::AppState, users::User};
use actix_web::{HttpResponse, web};
use serde_json::json;
use uuid::Uuid;

pub async fn users_get(
    _user: User,
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
) -> Result<HttpResponse, MailcastError> {
    Ok(
        match state.api.users().get(user_id.into_inner().into()).await? {
            Some(user) => HttpResponse::Ok().json(user),
            None => HttpResponse::NotFound().json(json!({ "message": "User is not found." })),
        },
    )
}
