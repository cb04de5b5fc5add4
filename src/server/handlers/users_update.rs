use crate::{
    error::Error as MailcastError,
    server::app_state::AppState,
    users::{User, UserUpdateParams},
};
use actix_web::{HttpResponse, web};
use serde_json::json;
use uuid::Uuid;

pub async fn users_update(
    _user: User,
    state: web::Data<AppState>,
    user_id: web::Path<Uuid>,
    body_params: web::Json<UserUpdateParams>,
) -> Result<HttpResponse, MailcastError> {
    Ok(
        match state
            .api
            .users()
            .update(user_id.into_inner().into(), body_params.into_inner())
            .await?
        {
            Some(user) => HttpResponse::Ok().json(user),
            None => HttpResponse::NotFound().json(json!({ "message": "User is not found." })),
        },
    )
}
